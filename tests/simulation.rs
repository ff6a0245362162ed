use ase_sim::consts::*;
use ase_sim::prelude::*;

use std::collections::HashMap;

fn game_data() -> GameData {
    let charset: HashMap<char, u16> = (' '..='~').map(|ch| (ch, ch as u16)).collect();
    let species = NameTable::new(
        NameKind::Species,
        ["Missingno", "Kakuna", "Gyarados"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    );
    let moves = NameTable::new(
        NameKind::Move,
        ["None", "Thunder", "Bug Bite"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    );

    GameData::new(species, moves, CharMap::new(charset))
}

fn gyarados_image() -> Vec<u8> {
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

    build_hall_of_fame(vec![record; 3], 27, &game_data()).unwrap()
}

#[test]
fn full_sweep_covers_the_grid() {
    // no commands: every trial aborts on its first fetch
    let set = CommandSet::new([]);
    let simulation = Simulation::new(ExecWindow::new(0x110000, 0x1102E8), &set, gyarados_image());

    let hits = simulation.simulate_default();

    assert_eq!(hits.outer_count(), SWEEP_COUNT);
    for (base, outcomes) in hits.iter() {
        assert!(base >= SWEEP_START);
        assert!(base <= SWEEP_START + 0x100);
        assert_eq!(outcomes.len(), SWEEP_COUNT);
        assert!(outcomes.iter().all(|hit| !hit));
    }
}

#[test]
fn simulation_is_pure() {
    let set = CommandSet::new([Command::new(0x0000, "Nop", vec![])]);
    let simulation = Simulation::new(
        ExecWindow::new(ENTRY_OFFSET + 2, ENTRY_OFFSET + 0x10),
        &set,
        gyarados_image(),
    );
    let outer = SweepRange::new(SWEEP_START, 3, 4);
    let inner = SweepRange::new(SWEEP_START, 5, 4);

    assert_eq!(
        simulation.simulate_full(&outer, &inner),
        simulation.simulate_full(&outer, &inner)
    );
}

#[test]
fn trial_succeeds_when_the_cursor_enters_the_window() {
    // zeroed memory decodes as an endless run of two-byte Nops
    let set = CommandSet::new([Command::new(0x0000, "Nop", vec![])]);
    let simulation = Simulation::new(
        ExecWindow::new(ENTRY_OFFSET + 2, ENTRY_OFFSET + 0x10),
        &set,
        Vec::new(),
    );

    let hits = simulation.simulate_full(
        &SweepRange::new(SWEEP_START, 2, 4),
        &SweepRange::new(SWEEP_START, 4, 4),
    );

    assert_eq!(hits.outer_count(), 2);
    for (_, outcomes) in hits.iter() {
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|hit| *hit));
    }
}

#[test]
fn unreachable_window_fails_on_the_caps() {
    // the window sits past the range cap, so trials run into the limits
    let set = CommandSet::new([Command::new(0x0000, "Nop", vec![])]);
    let simulation = Simulation::new(
        ExecWindow::new(ENTRY_OFFSET + RANGE_LIMIT * 2, ENTRY_OFFSET + RANGE_LIMIT * 2 + 4),
        &set,
        Vec::new(),
    );

    let hits = simulation.simulate_full(
        &SweepRange::new(SWEEP_START, 1, 4),
        &SweepRange::new(SWEEP_START, 1, 4),
    );

    assert_eq!(hits.get(SWEEP_START), Some(&[false][..]));
}

#[test]
fn summary_reports_per_base_and_overall_rates() {
    let set = CommandSet::new([Command::new(0x0000, "Nop", vec![])]);

    let all_hits = Simulation::new(
        ExecWindow::new(ENTRY_OFFSET + 2, ENTRY_OFFSET + 0x10),
        &set,
        Vec::new(),
    )
    .simulate_full(
        &SweepRange::new(SWEEP_START, 2, 4),
        &SweepRange::new(SWEEP_START, 4, 4),
    );
    let summary = Summary::from_hits(&all_hits);
    assert_eq!(summary.per_base_rates().len(), 2);
    assert!(summary
        .per_base_rates()
        .iter()
        .all(|(_, rate)| *rate == 1.0));
    assert_eq!(summary.overall_rate(), 1.0);

    let no_hits = Simulation::new(ExecWindow::new(0x110000, 0x1102E8), &CommandSet::new([]), Vec::new())
        .simulate_full(
            &SweepRange::new(SWEEP_START, 2, 4),
            &SweepRange::new(SWEEP_START, 4, 4),
        );
    let summary = Summary::from_hits(&no_hits);
    assert_eq!(summary.overall_rate(), 0.0);
}

#[test]
fn gyarados_setup_sweeps_the_default_grid() {
    let data = game_data();
    let set = CommandSet::new([]);

    assert_eq!(
        GyaradosSetup.window(),
        ExecWindow::new(0x110148, 0x1102E8)
    );

    let summary = GyaradosSetup.run(&data, &set).unwrap();
    assert_eq!(summary.per_base_rates().len(), SWEEP_COUNT);
    assert_eq!(summary.overall_rate(), 0.0);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_sweep_matches_the_serial_one() {
    let set = CommandSet::new([Command::new(0x0000, "Nop", vec![])]);
    let simulation = Simulation::new(
        ExecWindow::new(ENTRY_OFFSET + 2, ENTRY_OFFSET + 0x10),
        &set,
        gyarados_image(),
    );
    let outer = SweepRange::new(SWEEP_START, 4, 4);
    let inner = SweepRange::new(SWEEP_START, 4, 4);

    assert_eq!(
        simulation.simulate_full_par(&outer, &inner),
        simulation.simulate_full(&outer, &inner)
    );
}
