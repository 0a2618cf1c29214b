use crate::core::Result;
use crate::domain::{ChangeSet, Coord, PatternLibrary};

use super::random::roll_alive;
use super::BoardEngine;

pub(super) fn apply_toggles(engine: &mut BoardEngine, coords: Vec<Coord>) -> Result<ChangeSet> {
    // Validate the whole batch first so a bad coordinate never leaves a
    // partially applied edit behind.
    for c in &coords {
        if let Err(err) = engine.grid.check_bounds(c.row, c.col) {
            log::warn!("toggle batch of {} rejected: {}", coords.len(), err);
            return Err(err);
        }
    }

    for c in &coords {
        engine.grid.toggle(c.row, c.col)?;
    }
    if !coords.is_empty() {
        engine.generation = 0;
    }
    Ok(coords.into_iter().collect())
}

/// Kill every live cell, row-major.
fn kill_all(engine: &mut BoardEngine) -> ChangeSet {
    let grid = &mut engine.grid;
    let mut changes = ChangeSet::with_capacity(grid.live_count() as usize);
    for idx in 0..grid.size() {
        if grid.alive[idx] != 0 {
            grid.toggle_index(idx);
            let (row, col) = grid.coords(idx);
            changes.push(Coord::new(row, col));
        }
    }
    changes
}

pub(super) fn clear(engine: &mut BoardEngine) -> ChangeSet {
    let changes = kill_all(engine);
    engine.generation = 0;
    log::debug!("board cleared ({} cells died)", changes.len());
    changes
}

pub(super) fn reset(engine: &mut BoardEngine, randomize: bool) -> ChangeSet {
    if !randomize {
        return clear(engine);
    }

    let percent = engine.random_fill_percent;
    let mut changes = ChangeSet::new();
    for idx in 0..engine.grid.size() {
        let target = roll_alive(&mut engine.rng_state, percent);
        if target != (engine.grid.alive[idx] != 0) {
            engine.grid.toggle_index(idx);
            let (row, col) = engine.grid.coords(idx);
            changes.push(Coord::new(row, col));
        }
    }
    engine.generation = 0;
    log::debug!(
        "board randomized at {}%: {} live cells",
        percent,
        engine.grid.live_count()
    );
    changes
}

pub(super) fn load_pattern(
    engine: &mut BoardEngine,
    library: &PatternLibrary,
    name: &str,
) -> Result<ChangeSet> {
    let cells = library.get(name, engine.grid.height(), engine.grid.width())?;

    let before = engine.grid.alive_cells().to_vec();
    kill_all(engine);
    // `centered` only yields on-board cells.
    for c in &cells {
        engine.grid.toggle(c.row, c.col)?;
    }
    engine.generation = 0;

    // Cells that died in the clear and came back with the pattern cancel out.
    let after = engine.grid.alive_cells();
    let changes = (0..after.len())
        .filter(|&idx| before[idx] != after[idx])
        .map(|idx| {
            let (row, col) = engine.grid.coords(idx);
            Coord::new(row, col)
        })
        .collect();
    log::debug!("pattern '{}' loaded ({} cells)", name, cells.len());
    Ok(changes)
}
