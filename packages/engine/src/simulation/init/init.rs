use crate::core::Result;
use crate::grid::Grid;

use super::config::EngineConfig;
use super::perf_stats::PerfStats;
use super::random::seed_state;
use super::BoardEngine;

pub(super) fn create_board_engine(config: &EngineConfig) -> Result<BoardEngine> {
    config.validate()?;
    let grid = Grid::new(config.height, config.width)?;

    log::info!(
        "board engine created: {}x{} ({} cells)",
        config.height,
        config.width,
        grid.size()
    );

    Ok(BoardEngine {
        back: grid.clone(),
        grid,
        generation: 0,
        rng_state: seed_state(config.seed),
        random_fill_percent: config.random_fill_percent,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
