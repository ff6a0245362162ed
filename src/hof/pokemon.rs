//! Single Hall of Fame party member

use crate::bytes;
use crate::consts::*;
use crate::error::EncodeError;
use crate::tables::{GameData, NameInput, NameOrId};

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One party member as the Hall of Fame stores it.
///
/// Species and moves may be given by name or raw id; both name fields accept
/// text or pre-encoded units. Scalar fields carry the exact width the wire
/// layout encodes.
pub struct HallOfFamePokemon {
    /// Species, by name or id.
    pub species: NameOrId,
    /// Level.
    pub level: u8,
    /// Forme index.
    pub forme: u8,
    /// Personality value.
    pub pid: u32,
    /// Visible trainer id.
    pub trainer_id: u16,
    /// Secret trainer id.
    pub secret_id: u16,
    /// Nickname, up to eleven units with terminator.
    pub nickname: NameInput,
    /// Original trainer name, up to eight units with terminator.
    pub trainer_name: NameInput,
    /// The four move slots, by name or id.
    pub moves: [NameOrId; 4],
}

impl HallOfFamePokemon {
    /// Serialize into the fixed 0x3C byte wire layout.
    ///
    /// Field order is the cartridge order: species, level, forme, PID,
    /// trainer ids, nickname, trainer name, moves, two bytes of padding.
    pub fn encode(&self, data: &GameData) -> Result<[u8; POKEMON_SIZE], EncodeError> {
        let mut out = [0u8; POKEMON_SIZE];

        let mut at = bytes::write(&mut out, 0, data.species.resolve(&self.species)?)?;
        at = bytes::write(&mut out, at, self.level)?;
        at = bytes::write(&mut out, at, self.forme)?;
        at = bytes::write(&mut out, at, self.pid)?;
        at = bytes::write(&mut out, at, self.trainer_id)?;
        at = bytes::write(&mut out, at, self.secret_id)?;

        let nickname = data.charset.encode(&self.nickname, NICKNAME_UNITS)?;
        at = bytes::write(&mut out, at, nickname.as_slice())?;
        let trainer_name = data.charset.encode(&self.trainer_name, TRAINER_NAME_UNITS)?;
        at = bytes::write(&mut out, at, trainer_name.as_slice())?;

        for slot in &self.moves {
            at = bytes::write(&mut out, at, data.moves.resolve(slot)?)?;
        }

        // Two padding bytes complete the slot.
        debug_assert_eq!(at, POKEMON_SIZE - 2);
        debug!(written = at, "encoded party member");

        Ok(out)
    }
}
