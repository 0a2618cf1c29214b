//! Board engine - toroidal Game of Life state
//!
//! BoardEngine only orchestrates:
//! - grid storage and neighbor bookkeeping live in spatial/grid
//! - toggles, clear and randomized reset in commands/
//! - the generation step in step/
//! - read-only views for the renderer in render/
//!
//! The engine keeps no notion of "running". The driver owns the timer and
//! stops calling `step` once it returns an empty ChangeSet.

use crate::core::Result;
use crate::domain::{ChangeSet, Coord, PatternLibrary};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/snapshot.rs"]
mod snapshot;
mod facade;

pub use config::{
    EngineConfig, DEFAULT_HEIGHT, DEFAULT_RANDOM_FILL_PERCENT, DEFAULT_SEED, DEFAULT_WIDTH,
};
pub use facade::Life;
pub use perf_stats::PerfStats;
pub use snapshot::Snapshot;

use perf_timer::PerfTimer;

/// The board and everything needed to advance it.
pub struct BoardEngine {
    grid: Grid,
    back: Grid, // next-generation buffer, swapped with `grid` by step

    generation: u64,
    rng_state: u32,
    random_fill_percent: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl BoardEngine {
    /// All-dead `height` x `width` board. Both must be at least 3.
    pub fn new(height: u32, width: u32) -> Result<Self> {
        init::create_board_engine(&EngineConfig::new(height, width))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        init::create_board_engine(config)
    }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn live_count(&self) -> u32 { self.grid.live_count() }

    /// Steps since the last clear, reset or user edit.
    pub fn generation(&self) -> u64 { self.generation }

    pub fn random_fill_percent(&self) -> u32 { self.random_fill_percent }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Values above 100 are clamped.
    pub fn set_random_fill_percent(&mut self, percent: u32) {
        settings::set_random_fill_percent(self, percent);
    }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Flip every listed cell, in order. Duplicates flip twice.
    ///
    /// Fails with `OutOfBounds` before touching the board if any coordinate
    /// is off the grid. The returned ChangeSet echoes the input.
    pub fn apply_toggles<I>(&mut self, coords: I) -> Result<ChangeSet>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let coords: Vec<Coord> = coords.into_iter().map(Into::into).collect();
        commands::apply_toggles(self, coords)
    }

    /// Kill every live cell. Clearing an empty board returns no changes.
    pub fn clear(&mut self) -> ChangeSet {
        commands::clear(self)
    }

    /// `clear`, or with `randomize` refill each cell alive with
    /// `random_fill_percent` chance.
    pub fn reset(&mut self, randomize: bool) -> ChangeSet {
        commands::reset(self, randomize)
    }

    /// Clear the board and place `name` centered on it.
    pub fn load_pattern(&mut self, library: &PatternLibrary, name: &str) -> Result<ChangeSet> {
        commands::load_pattern(self, library, name)
    }

    /// Step the simulation forward one generation.
    /// Returns changed cells in row-major order; empty means the board settled.
    pub fn step(&mut self) -> ChangeSet {
        step::step(self)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.grid)
    }

    /// Recount every neighbor total from scratch and compare with the
    /// incremental counts.
    pub fn verify_neighbor_counts(&self) -> bool {
        self.grid.neighbor_counts_consistent()
    }

    /// Get pointer to liveness array (for JS rendering)
    pub fn alive_ptr(&self) -> *const u8 {
        self.grid.alive_ptr()
    }

    pub fn alive_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
