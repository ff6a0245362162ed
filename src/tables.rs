//! Static name and character tables backing the encoders
//!
//! The tables are built once from their resource files and never mutated
//! afterwards; the encoders and the interpreter only ever borrow them.

use crate::consts::*;
use crate::error::{EncodeError, ResourceError};

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io;
use tracing::warn;

/// Which name table a lookup failed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// The species list.
    Species,
    /// The move list.
    Move,
}

impl NameKind {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A species or move given either by name or by raw id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameOrId {
    /// Resolve against the table.
    Name(String),
    /// Use the id verbatim.
    Id(u16),
}

impl Default for NameOrId {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl From<&str> for NameOrId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for NameOrId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u16> for NameOrId {
    fn from(id: u16) -> Self {
        Self::Id(id)
    }
}

/// An ordered name list; the id of an entry is its position.
#[derive(Debug, Clone)]
pub struct NameTable {
    kind: NameKind,
    entries: Vec<String>,
}

impl NameTable {
    /// Table over `entries` in id order.
    pub fn new(kind: NameKind, entries: Vec<String>) -> Self {
        Self { kind, entries }
    }

    /// Load a table from a JSON array of names.
    pub fn from_reader<R>(kind: NameKind, src: R) -> Result<Self, ResourceError>
    where
        R: io::Read,
    {
        Ok(Self::new(kind, serde_json::from_reader(src)?))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name to its id; ids pass through verbatim.
    pub fn resolve(&self, key: &NameOrId) -> Result<u16, EncodeError> {
        match key {
            NameOrId::Id(id) => Ok(*id),
            NameOrId::Name(name) => {
                let position = self
                    .entries
                    .iter()
                    .position(|entry| entry == name)
                    .ok_or_else(|| EncodeError::UnknownName(self.kind, name.clone()))?;

                u16::try_from(position).map_err(|_| EncodeError::FieldOverflow {
                    field: self.kind.as_str(),
                    value: position as u64,
                })
            }
        }
    }
}

/// A name given either as text or as raw 16-bit units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameInput {
    /// Encode through the character table.
    Text(String),
    /// Copy the units verbatim.
    Raw(Vec<u16>),
}

impl Default for NameInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for NameInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for NameInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u16>> for NameInput {
    fn from(units: Vec<u16>) -> Self {
        Self::Raw(units)
    }
}

/// Character to 16-bit code mapping with the terminator policy attached.
#[derive(Debug, Clone)]
pub struct CharMap {
    map: HashMap<char, u16>,
    enforce_terminator: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    One(String),
    Many(Vec<String>),
}

impl CharMap {
    /// Map with the default terminator policy (enforced).
    pub fn new(map: HashMap<char, u16>) -> Self {
        Self {
            map,
            enforce_terminator: true,
        }
    }

    /// Override the terminator policy.
    pub fn with_terminator_policy(mut self, enforce: bool) -> Self {
        self.enforce_terminator = enforce;
        self
    }

    /// Load a map from JSON of `character -> hex code`.
    ///
    /// A value may be a list of codes; the first one is canonical.
    pub fn from_reader<R>(src: R) -> Result<Self, ResourceError>
    where
        R: io::Read,
    {
        let raw: HashMap<char, RawCode> = serde_json::from_reader(src)?;

        let mut map = HashMap::with_capacity(raw.len());
        for (character, code) in raw {
            let code = match &code {
                RawCode::One(code) => code.as_str(),
                RawCode::Many(codes) => codes
                    .first()
                    .map(String::as_str)
                    .ok_or_else(|| ResourceError::InvalidCharacterCode {
                        character,
                        code: "[]".to_string(),
                    })?,
            };
            map.insert(character, parse_code(character, code)?);
        }

        Ok(Self::new(map))
    }

    /// Code for `character`, if mapped.
    pub fn code(&self, character: char) -> Option<u16> {
        self.map.get(&character).copied()
    }

    /// Encode a name into exactly `capacity` units.
    ///
    /// Inputs longer than the capacity are truncated with a warning; under
    /// the default policy the final unit written is always the terminator.
    pub fn encode(&self, input: &NameInput, capacity: usize) -> Result<Vec<u16>, EncodeError> {
        match input {
            NameInput::Text(text) => self.fill(
                text.chars().map(|character| {
                    self.code(character)
                        .ok_or(EncodeError::UnknownCharacter(character))
                }),
                capacity,
            ),
            NameInput::Raw(units) => self.fill(units.iter().copied().map(Ok), capacity),
        }
    }

    fn fill<I>(&self, units: I, capacity: usize) -> Result<Vec<u16>, EncodeError>
    where
        I: Iterator<Item = Result<u16, EncodeError>>,
    {
        let mut out = vec![0u16; capacity];
        let mut last = None;

        for (i, unit) in units.enumerate() {
            // The last unit is reserved for the terminator.
            if i + 1 >= capacity {
                warn!(capacity, "name input too long, truncating");
                last = Some(i);
                break;
            }
            out[i] = unit?;
            last = Some(i);
        }

        if self.enforce_terminator {
            terminate(&mut out, last);
        }

        Ok(out)
    }
}

fn terminate(out: &mut [u16], last: Option<usize>) {
    if out.is_empty() {
        return;
    }
    let Some(last) = last else {
        out[0] = NAME_TERMINATOR;
        return;
    };

    let last = last.min(out.len() - 1);
    if out[last] == NAME_TERMINATOR {
        return;
    }
    if last == out.len() - 1 {
        warn!("overwriting last character with terminator");
        out[last] = NAME_TERMINATOR;
    } else {
        out[last + 1] = NAME_TERMINATOR;
    }
}

fn parse_code(character: char, code: &str) -> Result<u16, ResourceError> {
    let digits = code
        .strip_prefix("0x")
        .or_else(|| code.strip_prefix("0X"))
        .unwrap_or(code);

    u16::from_str_radix(digits, 16).map_err(|_| ResourceError::InvalidCharacterCode {
        character,
        code: code.to_string(),
    })
}

/// The immutable resource context threaded through the encoders.
#[derive(Debug, Clone)]
pub struct GameData {
    /// Species list.
    pub species: NameTable,
    /// Move list.
    pub moves: NameTable,
    /// Character table.
    pub charset: CharMap,
}

impl GameData {
    /// Bundle already loaded tables.
    pub fn new(species: NameTable, moves: NameTable, charset: CharMap) -> Self {
        Self {
            species,
            moves,
            charset,
        }
    }

    /// Load all three tables from their resource readers.
    pub fn from_readers<R>(species: R, moves: R, charmap: R) -> Result<Self, ResourceError>
    where
        R: io::Read,
    {
        Ok(Self::new(
            NameTable::from_reader(NameKind::Species, species)?,
            NameTable::from_reader(NameKind::Move, moves)?,
            CharMap::from_reader(charmap)?,
        ))
    }
}
