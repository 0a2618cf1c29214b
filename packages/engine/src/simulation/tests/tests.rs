use super::*;
use crate::core::EngineError;

const GLIDER: [(u32, u32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

fn place(origin: (u32, u32), shape: &[(u32, u32)], height: u32, width: u32) -> Vec<Coord> {
    let mut cells: Vec<Coord> = shape
        .iter()
        .map(|&(r, c)| Coord::new((origin.0 + r) % height, (origin.1 + c) % width))
        .collect();
    cells.sort();
    cells
}

fn live_sorted(engine: &BoardEngine) -> Vec<Coord> {
    let mut cells: Vec<Coord> = engine.snapshot().live_cells().collect();
    cells.sort();
    cells
}

fn assert_row_major(changes: &ChangeSet) {
    let cells = changes.as_slice();
    assert!(cells.windows(2).all(|w| w[0] < w[1]), "not row-major: {:?}", cells);
}

#[test]
fn new_board_is_dead_and_rejects_small_dimensions() {
    let engine = BoardEngine::new(3, 3).unwrap();
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.snapshot().to_vec(), vec![0u8; 9]);

    assert!(matches!(
        BoardEngine::new(2, 50),
        Err(EngineError::InvalidDimension { height: 2, width: 50 })
    ));
    assert!(BoardEngine::new(50, 1).is_err());
}

#[test]
fn dead_board_is_a_fixed_point() {
    let mut engine = BoardEngine::new(8, 8).unwrap();
    let changes = engine.step();
    assert!(changes.is_empty());
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.generation(), 0);
}

#[test]
fn glider_translates_by_one_after_four_steps() {
    let mut engine = BoardEngine::new(20, 20).unwrap();
    engine.apply_toggles(place((5, 5), &GLIDER, 20, 20)).unwrap();

    for _ in 0..4 {
        assert!(!engine.step().is_empty());
        assert!(engine.verify_neighbor_counts());
    }

    assert_eq!(live_sorted(&engine), place((6, 6), &GLIDER, 20, 20));
    assert_eq!(engine.generation(), 4);
}

#[test]
fn glider_wraps_across_both_edges() {
    let mut engine = BoardEngine::new(20, 20).unwrap();
    engine.apply_toggles(place((18, 18), &GLIDER, 20, 20)).unwrap();

    for _ in 0..4 {
        engine.step();
    }

    // Origin moves to (19, 19); the shape now straddles every edge.
    assert_eq!(live_sorted(&engine), place((19, 19), &GLIDER, 20, 20));
    assert!(engine.verify_neighbor_counts());
}

#[test]
fn step_is_deterministic_across_engines() {
    let cells = place((3, 7), &[(0, 0), (0, 1), (1, 0), (2, 2), (2, 3), (3, 3), (1, 5)], 16, 24);

    let mut a = BoardEngine::new(16, 24).unwrap();
    let mut b = BoardEngine::new(16, 24).unwrap();
    a.apply_toggles(cells.clone()).unwrap();
    b.apply_toggles(cells).unwrap();

    for _ in 0..10 {
        let ca = a.step();
        let cb = b.step();
        assert_eq!(ca, cb);
        assert_row_major(&ca);
        assert_eq!(a.snapshot().to_vec(), b.snapshot().to_vec());
    }
}

#[test]
fn step_changes_are_row_major_and_exact() {
    let mut engine = BoardEngine::new(6, 6).unwrap();
    // Vertical blinker at column 2.
    engine.apply_toggles([(1, 2), (2, 2), (3, 2)]).unwrap();

    let changes = engine.step();
    assert_eq!(
        changes.into_vec(),
        vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(2, 3), Coord::new(3, 2)]
    );
    assert_eq!(live_sorted(&engine), vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);
}

#[test]
fn still_life_settles_without_advancing_generation() {
    let mut engine = BoardEngine::new(10, 10).unwrap();
    engine.apply_toggles([(4, 4), (4, 5), (5, 4), (5, 5)]).unwrap();

    assert!(engine.step().is_empty());
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.live_count(), 4);
}

#[test]
fn corner_cells_are_toroidal_neighbors() {
    let (h, w) = (7, 11);
    let mut engine = BoardEngine::new(h, w).unwrap();
    engine.apply_toggles([(0, 0)]).unwrap();
    assert_eq!(engine.snapshot().neighbor_count(0, 0), Some(0));
    assert_eq!(engine.snapshot().neighbor_count(h - 1, w - 1), Some(1));

    engine.apply_toggles([(h - 1, w - 1)]).unwrap();
    assert_eq!(engine.snapshot().neighbor_count(0, 0), Some(1));

    engine.apply_toggles([(h - 1, w - 1)]).unwrap();
    assert_eq!(engine.snapshot().neighbor_count(0, 0), Some(0));
    assert!(engine.verify_neighbor_counts());
}

#[test]
fn double_toggle_restores_cell_and_counts() {
    let mut engine = BoardEngine::new(5, 5).unwrap();
    let changes = engine.apply_toggles([(2, 3), (2, 3)]).unwrap();
    assert_eq!(changes.len(), 2);

    let snap = engine.snapshot();
    assert!(!snap.is_alive(2, 3));
    assert_eq!(snap.live_count(), 0);
    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(snap.neighbor_count(r, c), Some(0));
        }
    }
}

#[test]
fn out_of_bounds_batch_is_rejected_without_side_effects() {
    let mut engine = BoardEngine::new(5, 5).unwrap();
    engine.apply_toggles([(0, 0)]).unwrap();
    engine.step();

    let before = engine.snapshot().to_vec();
    let err = engine.apply_toggles([(1, 1), (5, 0), (2, 2)]).unwrap_err();
    assert_eq!(err, EngineError::OutOfBounds { row: 5, col: 0, height: 5, width: 5 });

    assert_eq!(engine.snapshot().to_vec(), before);
    assert!(engine.verify_neighbor_counts());
}

#[test]
fn toggles_echo_input_order_and_reset_generation() {
    let mut engine = BoardEngine::new(10, 10).unwrap();
    engine.apply_toggles([(1, 1), (1, 2), (1, 3)]).unwrap();
    engine.step();
    assert_eq!(engine.generation(), 1);

    let changes = engine.apply_toggles([(9, 9), (0, 0)]).unwrap();
    assert_eq!(changes.into_vec(), vec![Coord::new(9, 9), Coord::new(0, 0)]);
    assert_eq!(engine.generation(), 0);
}

#[test]
fn clear_reports_dead_cells_and_is_idempotent() {
    let mut engine = BoardEngine::new(6, 6).unwrap();
    engine.apply_toggles([(5, 5), (0, 1), (3, 2)]).unwrap();

    let changes = engine.clear();
    assert_eq!(
        changes.into_vec(),
        vec![Coord::new(0, 1), Coord::new(3, 2), Coord::new(5, 5)]
    );
    assert_eq!(engine.live_count(), 0);
    assert!(engine.verify_neighbor_counts());

    assert!(engine.clear().is_empty());
}

#[test]
fn randomized_reset_is_seeded_and_consistent() {
    let config = EngineConfig { height: 30, width: 40, random_fill_percent: 30, seed: 99 };
    let mut a = BoardEngine::from_config(&config).unwrap();
    let mut b = BoardEngine::from_config(&config).unwrap();

    let ca = a.reset(true);
    let cb = b.reset(true);
    assert_eq!(ca, cb);
    assert_row_major(&ca);
    assert_eq!(ca.len() as u32, a.live_count());
    assert!(a.live_count() > 0 && a.live_count() < 30 * 40);
    assert!(a.verify_neighbor_counts());

    // Second reset only reports cells that actually flipped.
    let before = a.snapshot().to_vec();
    let changes = a.reset(true);
    let after = a.snapshot().to_vec();
    let flipped = before.iter().zip(&after).filter(|(x, y)| x != y).count();
    assert_eq!(changes.len(), flipped);
}

#[test]
fn random_soup_keeps_invariant_every_generation() {
    let mut engine = BoardEngine::new(24, 31).unwrap();
    engine.set_seed(4242);
    engine.reset(true);

    for _ in 0..40 {
        let before = engine.snapshot().to_vec();
        let changes = engine.step();
        let after = engine.snapshot().to_vec();

        assert!(engine.verify_neighbor_counts());
        assert_row_major(&changes);
        let expected: Vec<Coord> = (0..before.len())
            .filter(|&i| before[i] != after[i])
            .map(|i| Coord::new(i as u32 / 31, i as u32 % 31))
            .collect();
        assert_eq!(changes.into_vec(), expected);
    }
}

#[test]
fn full_board_dies_in_one_step() {
    let mut engine = BoardEngine::new(5, 5).unwrap();
    engine.set_random_fill_percent(100);
    assert_eq!(engine.reset(true).len(), 25);

    // Every cell has 8 live neighbors.
    assert_eq!(engine.snapshot().neighbor_count(2, 2), Some(8));
    assert_eq!(engine.step().len(), 25);
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn fill_percent_is_clamped() {
    let mut engine = BoardEngine::new(4, 4).unwrap();
    engine.set_random_fill_percent(250);
    assert_eq!(engine.random_fill_percent(), 100);

    engine.set_random_fill_percent(0);
    assert!(engine.reset(true).is_empty());
}

#[test]
fn load_pattern_replaces_board_and_cancels_unchanged_cells() {
    let library = PatternLibrary::from_generated();
    let mut engine = BoardEngine::new(70, 110).unwrap();
    engine.apply_toggles([(0, 0)]).unwrap();

    let changes = engine.load_pattern(&library, "glider").unwrap();
    assert_eq!(changes.len(), 6);
    assert_row_major(&changes);
    assert_eq!(engine.live_count(), 5);
    assert!(!engine.snapshot().is_alive(0, 0));

    // Same pattern again: nothing visible changes.
    assert!(engine.load_pattern(&library, "glider").unwrap().is_empty());
    assert!(engine.verify_neighbor_counts());
}

#[test]
fn load_pattern_failure_leaves_board_alone() {
    let library = PatternLibrary::from_generated();
    let mut engine = BoardEngine::new(10, 10).unwrap();
    engine.apply_toggles([(3, 3)]).unwrap();

    assert!(matches!(
        engine.load_pattern(&library, "nope"),
        Err(EngineError::UnknownPattern(_))
    ));
    assert!(matches!(
        engine.load_pattern(&library, "lobster"),
        Err(EngineError::PatternTooLarge { .. })
    ));
    assert_eq!(engine.live_count(), 1);
}

#[test]
fn perf_stats_track_births_and_deaths() {
    let mut engine = BoardEngine::new(8, 8).unwrap();
    engine.apply_toggles([(3, 2), (3, 3), (3, 4)]).unwrap();

    engine.step();
    assert_eq!(engine.get_perf_stats().births(), 0);

    engine.enable_perf_metrics(true);
    engine.step();
    let stats = engine.get_perf_stats();
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);
    assert_eq!(stats.live_cells(), 3);
    assert_eq!(stats.grid_size(), 64);
    assert_eq!(stats.generation(), 2);
    assert!(stats.rows_skipped() > 0);
    assert!(stats.step_ms() >= 0.0);
}
