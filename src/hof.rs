//! Hall of Fame block assembly

use crate::bytes;
use crate::consts::*;
use crate::error::EncodeError;
use crate::tables::GameData;

mod pokemon;
mod record;

pub use pokemon::HallOfFamePokemon;
pub use record::HallOfFameRecord;

/// The ring of Hall of Fame records.
///
/// The ring holds thirty slots; a record at input position `i` lands in slot
/// `(i + record_start) % 30`, the FIFO order the game writes clears in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HallOfFame {
    /// Records to place, oldest first.
    pub records: Vec<HallOfFameRecord>,
    /// Slot the first record lands in.
    pub record_start: usize,
}

impl HallOfFame {
    /// Block over `records` rotated to begin at `record_start`.
    pub fn new(records: Vec<HallOfFameRecord>, record_start: usize) -> Self {
        Self {
            records,
            record_start,
        }
    }

    /// Serialize the ring into its fixed 10,920 byte image.
    ///
    /// Slots without a record stay zero. Supplying more records than slots
    /// is [`EncodeError::RecordOverflow`]; rotation never overwrites.
    pub fn encode(&self, data: &GameData) -> Result<Vec<u8>, EncodeError> {
        if self.records.len() > HOF_SLOTS {
            return Err(EncodeError::RecordOverflow(self.records.len()));
        }

        let mut out = vec![0u8; HOF_SIZE];
        for (i, record) in self.records.iter().enumerate() {
            let slot = (i + self.record_start) % HOF_SLOTS;
            bytes::write(&mut out, slot * RECORD_SIZE, record.encode(data)?.as_slice())?;
        }

        Ok(out)
    }
}

/// Encode `records` into the ring starting at `record_start`.
pub fn build_hall_of_fame(
    records: Vec<HallOfFameRecord>,
    record_start: usize,
    data: &GameData,
) -> Result<Vec<u8>, EncodeError> {
    HallOfFame::new(records, record_start).encode(data)
}
