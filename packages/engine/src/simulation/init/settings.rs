use super::perf_stats::PerfStats;
use super::random::seed_state;
use super::BoardEngine;

pub(super) fn enable_perf_metrics(engine: &mut BoardEngine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(engine: &BoardEngine) -> PerfStats {
    engine.perf_stats.clone()
}

pub(super) fn set_random_fill_percent(engine: &mut BoardEngine, percent: u32) {
    if percent > 100 {
        log::warn!("random fill {}% clamped to 100%", percent);
    }
    engine.random_fill_percent = percent.min(100);
}

pub(super) fn set_seed(engine: &mut BoardEngine, seed: u32) {
    engine.rng_state = seed_state(seed);
}
