//! Cartridge script command table

use crate::consts::*;
use crate::error::ResourceError;

use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use tracing::warn;

/// Cursor-advance strategy attached to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advancer {
    /// Walk the parameters, gating on work-variable validity.
    Generic,
    /// Walk the parameters, applying jump offsets to the cursor.
    Jump,
}

/// One positional parameter of a command.
///
/// The name decides how the interpreter treats the value: work-variable
/// parameters gate execution on the value range, jump parameters move the
/// cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    width: usize,
}

impl Parameter {
    /// Parameter with an explicit byte width.
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    /// Parameter name as the command table lists it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes the parameter consumes.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// `true` for work-variable parameters.
    pub fn is_work(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("wk") || name.contains("work")
    }

    /// `true` for jump-offset parameters.
    pub fn is_jump(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("jmp") || name.contains("jump")
    }
}

/// One scripting command: id, name and positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    id: u16,
    name: String,
    parameters: Vec<Parameter>,
    advancer: Option<Advancer>,
}

impl Command {
    /// Command with the generic advancer.
    pub fn new(id: u16, name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            id,
            name: name.into(),
            parameters,
            advancer: Some(Advancer::Generic),
        }
    }

    /// Replace the advancer.
    pub fn with_advancer(mut self, advancer: Advancer) -> Self {
        self.advancer = Some(advancer);
        self
    }

    /// Command id.
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional parameters in consumption order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Advancer handling the parameters; `None` aborts at dispatch.
    pub const fn advancer(&self) -> Option<Advancer> {
        self.advancer
    }

    /// `end` and `return` halt interpretation, whatever their case.
    pub fn halts(&self) -> bool {
        self.name.eq_ignore_ascii_case("end") || self.name.eq_ignore_ascii_case("return")
    }
}

#[derive(Deserialize)]
struct RawCommand {
    command: String,
    #[serde(default)]
    parameters: Vec<String>,
    #[serde(default)]
    parser_class: Option<String>,
}

/// The command table, indexed by 16-bit id.
#[derive(Debug, Clone, Default)]
pub struct CommandSet {
    commands: HashMap<u16, Command>,
}

impl CommandSet {
    /// Table over already built commands.
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands
                .into_iter()
                .map(|command| (command.id(), command))
                .collect(),
        }
    }

    /// Load a table from its JSON resource with the default parameter width.
    pub fn from_reader<R>(src: R) -> Result<Self, ResourceError>
    where
        R: io::Read,
    {
        Self::from_reader_with_width(src, DEFAULT_PARAM_WIDTH)
    }

    /// Load a table from its JSON resource.
    ///
    /// The resource maps hexadecimal ids to a command name, a parameter name
    /// list and an optional advancer selector. The resource never carries
    /// widths: every listed parameter occurrence consumes `width` bytes, and
    /// a repeated name counts as one more positional parameter.
    pub fn from_reader_with_width<R>(src: R, width: usize) -> Result<Self, ResourceError>
    where
        R: io::Read,
    {
        let raw: HashMap<String, RawCommand> = serde_json::from_reader(src)?;

        let mut commands = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let id = parse_command_id(&key)?;
            let advancer = match entry.parser_class.as_deref() {
                None => Some(Advancer::Generic),
                Some(selector) => resolve_advancer(selector),
            };
            let parameters = entry
                .parameters
                .into_iter()
                .map(|name| Parameter::new(name, width))
                .collect();

            commands.insert(
                id,
                Command {
                    id,
                    name: entry.command,
                    parameters,
                    advancer,
                },
            );
        }

        Ok(Self { commands })
    }

    /// Command registered under `id`.
    pub fn get(&self, id: u16) -> Option<&Command> {
        self.commands.get(&id)
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` when the table holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn parse_command_id(key: &str) -> Result<u16, ResourceError> {
    let key = key.trim();
    let digits = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key);

    u16::from_str_radix(digits, 16).map_err(|_| ResourceError::InvalidCommandId(key.to_string()))
}

fn resolve_advancer(selector: &str) -> Option<Advancer> {
    match selector.to_lowercase().as_str() {
        "jump" | "jumpcommandsimulator" => Some(Advancer::Jump),
        "generic" | "commandsimulator" => Some(Advancer::Generic),
        _ => {
            warn!(selector, "unknown advancer selector, command will abort");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_roles_match_by_name_fragment() {
        assert!(Parameter::new("work_a", 2).is_work());
        assert!(Parameter::new("WK_RESULT", 2).is_work());
        assert!(Parameter::new("jump_offset", 4).is_jump());
        assert!(Parameter::new("RelJmp", 2).is_jump());
        assert!(!Parameter::new("flag_id", 2).is_work());
        assert!(!Parameter::new("flag_id", 2).is_jump());
    }

    #[test]
    fn halting_commands_match_case_insensitively() {
        assert!(Command::new(0, "End", vec![]).halts());
        assert!(Command::new(0, "RETURN", vec![]).halts());
        assert!(!Command::new(0, "EndlessLoop", vec![]).halts());
    }

    #[test]
    fn loader_accepts_bare_and_prefixed_hex_ids() {
        let src = r#"{
            "0x1": {"command": "SetWork", "parameters": ["work_a"]},
            "2E": {"command": "Nop", "parameters": []}
        }"#;
        let set = CommandSet::from_reader(src.as_bytes()).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0x01).unwrap().name(), "SetWork");
        assert_eq!(set.get(0x2E).unwrap().name(), "Nop");
    }

    #[test]
    fn repeated_parameter_names_become_repeated_slots() {
        let src = r#"{
            "0x2": {
                "command": "GotoRelative",
                "parameters": ["jump_offset", "jump_offset"],
                "parser_class": "JumpCommandSimulator"
            }
        }"#;
        let set = CommandSet::from_reader(src.as_bytes()).unwrap();

        let goto = set.get(0x02).unwrap();
        assert_eq!(goto.advancer(), Some(Advancer::Jump));
        assert_eq!(goto.parameters().len(), 2);
        assert!(goto
            .parameters()
            .iter()
            .all(|parameter| parameter.width() == DEFAULT_PARAM_WIDTH));
    }

    #[test]
    fn unknown_advancer_selector_degrades_to_none() {
        let src = r#"{
            "0x2A": {"command": "Mystery", "parameters": ["arg"], "parser_class": "FancyPants"}
        }"#;
        let set = CommandSet::from_reader(src.as_bytes()).unwrap();

        assert_eq!(set.get(0x2A).unwrap().advancer(), None);
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let src = r#"{"zz": {"command": "Nop", "parameters": []}}"#;

        assert!(matches!(
            CommandSet::from_reader(src.as_bytes()),
            Err(ResourceError::InvalidCommandId(key)) if key == "zz"
        ));
    }
}
