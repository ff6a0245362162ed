//! One Hall of Fame clear record

use crate::bytes;
use crate::consts::*;
use crate::error::EncodeError;
use crate::hof::HallOfFamePokemon;
use crate::tables::GameData;

/// A clear record: the party that entered plus the clear date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallOfFameRecord {
    /// Up to six party members.
    pub party: Vec<HallOfFamePokemon>,
    /// Clear year; stored modulo 2000.
    pub year: u16,
    /// Clear month.
    pub month: u8,
    /// Clear day.
    pub day: u8,
}

impl Default for HallOfFameRecord {
    fn default() -> Self {
        Self {
            party: Vec::new(),
            year: 2000,
            month: 1,
            day: 1,
        }
    }
}

impl HallOfFameRecord {
    /// Serialize into the fixed 364 byte wire layout.
    ///
    /// Party members pack contiguously from offset 0; empty slots stay
    /// zero. The date trails the party area as year (two bytes, modulo
    /// 2000), month and day.
    pub fn encode(&self, data: &GameData) -> Result<[u8; RECORD_SIZE], EncodeError> {
        if self.party.len() > PARTY_SLOTS {
            return Err(EncodeError::PartyOverflow(self.party.len()));
        }

        let mut out = [0u8; RECORD_SIZE];
        for (i, member) in self.party.iter().enumerate() {
            bytes::write(&mut out, i * POKEMON_SIZE, member.encode(data)?.as_slice())?;
        }

        let at = bytes::write(&mut out, PARTY_BYTES, self.year % YEAR_MODULUS)?;
        let at = bytes::write(&mut out, at, self.month)?;
        bytes::write(&mut out, at, self.day)?;

        Ok(out)
    }
}
