//! Shipping exploit setups
//!
//! A setup bundles the literal constants of one known-good exploit: the
//! payload window inside the backup save and the Hall of Fame content that
//! steers interpretation into it.

use crate::error::EncodeError;
use crate::hof::{HallOfFame, HallOfFamePokemon, HallOfFameRecord};
use crate::report::Summary;
use crate::script::CommandSet;
use crate::sim::{ExecWindow, Simulation};
use crate::tables::GameData;

const ITEM_REGION_END: usize = 0x1102E8;
const HM_REGION_START: usize = 0x110128;
const KEY_ITEM_REGION_START: usize = 0x110060;
// 2 bytes id, 2 bytes quantity
const ITEM_ENTRY_BYTES: usize = 4;

/// Payload window inside the backup save's item data.
///
/// With HM07 or HM08 in the bag the window floor moves past the whole HM
/// region; otherwise it starts after the key items. Ordering the key items
/// in the bag could lower the floor further.
pub fn backup_save_window(key_items: usize, hms: &[u8]) -> ExecWindow {
    if hms.contains(&7) || hms.contains(&8) {
        return ExecWindow::new(
            HM_REGION_START + ITEM_ENTRY_BYTES * hms.len(),
            ITEM_REGION_END,
        );
    }

    ExecWindow::new(
        KEY_ITEM_REGION_START + ITEM_ENTRY_BYTES * key_items,
        ITEM_REGION_END,
    )
}

/// A complete exploit description.
pub trait Setup {
    /// Payload window of the setup.
    fn window(&self) -> ExecWindow;

    /// Hall of Fame content the setup writes.
    fn hall_of_fame(&self) -> HallOfFame;

    /// Encode, sweep the default grid and summarize.
    fn run(&self, data: &GameData, commands: &CommandSet) -> Result<Summary, EncodeError> {
        let image = self.hall_of_fame().encode(data)?;
        let simulation = Simulation::new(self.window(), commands, image);

        let summary = Summary::from_hits(&simulation.simulate_default());
        summary.log();
        Ok(summary)
    }
}

/// The RNG-manipulated Gyarados setup, the current best one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GyaradosSetup;

impl Setup for GyaradosSetup {
    fn window(&self) -> ExecWindow {
        let all_hms: Vec<u8> = (1..=8).collect();
        backup_save_window(0, &all_hms)
    }

    fn hall_of_fame(&self) -> HallOfFame {
        let member = HallOfFamePokemon {
            species: "Gyarados".into(),
            level: 0x16,
            forme: 0,
            pid: 0xE1656,
            trainer_id: 0xFFFF,
            secret_id: 0xFFFF,
            nickname: "h".into(),
            trainer_name: "kh".into(),
            moves: ["Thunder".into(), 0u16.into(), 0u16.into(), 0u16.into()],
        };
        let record = HallOfFameRecord {
            party: vec![member],
            year: 2076,
            month: 1,
            day: 1,
        };

        // Only slots 28-30 of the ring are read back, so only those are
        // filled; records are 0-indexed.
        HallOfFame::new(vec![record; 3], 27)
    }
}

/// The traded Kakuna setup, for players who skip RNG manipulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct KakunaSetup;

impl Setup for KakunaSetup {
    fn window(&self) -> ExecWindow {
        let all_hms: Vec<u8> = (1..=8).collect();
        backup_save_window(0, &all_hms)
    }

    fn hall_of_fame(&self) -> HallOfFame {
        let member = HallOfFamePokemon {
            species: "Kakuna".into(),
            level: 0x16,
            forme: 0,
            pid: 0x12345678,
            trainer_id: 0xFFFF,
            secret_id: 0xFFFF,
            nickname: "h".into(),
            trainer_name: "Darugis".into(),
            moves: ["Bug Bite".into(), 0u16.into(), 0u16.into(), 0u16.into()],
        };

        let records = vec![
            HallOfFameRecord {
                party: vec![member.clone()],
                year: 2022,
                month: 12,
                day: 23,
            },
            HallOfFameRecord {
                party: vec![member.clone()],
                year: 2022,
                month: 12,
                day: 22,
            },
            HallOfFameRecord {
                party: vec![member],
                ..Default::default()
            },
        ];

        HallOfFame::new(records, 27)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hm_items_push_the_window_floor() {
        let hms: Vec<u8> = (1..=8).collect();

        assert_eq!(
            backup_save_window(0, &hms),
            ExecWindow::new(0x110148, 0x1102E8)
        );
    }

    #[test]
    fn key_items_shift_the_floor_without_late_hms() {
        assert_eq!(
            backup_save_window(5, &[]),
            ExecWindow::new(0x110074, 0x1102E8)
        );
        assert_eq!(
            backup_save_window(2, &[1, 2, 3]),
            ExecWindow::new(0x110068, 0x1102E8)
        );
    }

    #[test]
    fn shipped_setups_rotate_to_the_ring_tail() {
        assert_eq!(GyaradosSetup.hall_of_fame().record_start, 27);
        assert_eq!(KakunaSetup.hall_of_fame().records.len(), 3);
    }
}
