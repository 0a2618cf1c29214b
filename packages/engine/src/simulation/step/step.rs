use std::mem;

use crate::domain::{ChangeSet, Coord};

use super::perf_stats::saturating_u32;
use super::{BoardEngine, PerfTimer};

/// Advance one generation (B3/S23).
///
/// Reads only from `grid` (the current generation) and writes only into
/// `back`, which starts as a copy of the current state and has each
/// transition applied through `toggle_index`, so its counts describe the
/// new generation. The buffers are swapped once the whole board is done.
pub(super) fn step(engine: &mut BoardEngine) -> ChangeSet {
    let step_start = PerfTimer::start_if(engine.perf_enabled);

    let BoardEngine { grid, back, .. } = &mut *engine;
    back.copy_cells_from(grid);

    let height = grid.height();
    let width = grid.width();
    let mut changes = ChangeSet::new();
    let mut births = 0u32;
    let mut deaths = 0u32;
    let mut rows_skipped = 0u32;

    for row in 0..height {
        if grid.row_is_quiet(row) {
            rows_skipped += 1;
            continue;
        }
        let row_start = grid.index(row, 0);
        for col in 0..width {
            let idx = row_start + col as usize;
            let alive = *fast!(grid.alive, [idx]) != 0;
            let n = *fast!(grid.neighbors, [idx]);
            let next = n == 3 || (n == 2 && alive);
            if next != alive {
                back.toggle_index(idx);
                changes.push(Coord::new(row, col));
                if next {
                    births += 1;
                } else {
                    deaths += 1;
                }
            }
        }
    }

    mem::swap(grid, back);

    if changes.is_empty() {
        log::debug!("board settled at generation {}", engine.generation);
    } else {
        engine.generation += 1;
    }

    if let Some(t0) = step_start {
        let stats = &mut engine.perf_stats;
        stats.reset();
        stats.step_ms = t0.elapsed_ms();
        stats.births = births;
        stats.deaths = deaths;
        stats.rows_skipped = rows_skipped;
        stats.live_cells = engine.grid.live_count();
        stats.grid_size = saturating_u32(engine.grid.size());
        // alive + neighbors, front and back buffers
        stats.memory_bytes = saturating_u32(engine.grid.size()).saturating_mul(4);
        stats.generation = engine.generation;
    }

    changes
}
