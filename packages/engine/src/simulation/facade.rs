use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::{ChangeSet, PatternLibrary};

use super::perf_stats::PerfStats;
use super::{BoardEngine, EngineConfig};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing board. Every ChangeSet crosses the boundary flattened as
/// `[r0, c0, r1, c1, ...]`.
#[wasm_bindgen]
pub struct Life {
    core: BoardEngine,
    patterns: PatternLibrary,
}

#[wasm_bindgen]
impl Life {
    /// Create an all-dead board with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(height: u32, width: u32) -> Result<Life, JsValue> {
        Ok(Self {
            core: BoardEngine::new(height, width).map_err(to_js)?,
            patterns: PatternLibrary::from_generated(),
        })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Life, JsValue> {
        let config = EngineConfig::from_json(json).map_err(to_js)?;
        Ok(Self {
            core: BoardEngine::from_config(&config).map_err(to_js)?,
            patterns: PatternLibrary::from_generated(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn live_count(&self) -> u32 { self.core.live_count() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_random_fill_percent(&mut self, percent: u32) {
        self.core.set_random_fill_percent(percent);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Advance one generation; an empty result means the board settled
    pub fn step(&mut self) -> Vec<u32> {
        self.core.step().to_flat()
    }

    pub fn clear(&mut self) -> Vec<u32> {
        self.core.clear().to_flat()
    }

    pub fn reset(&mut self, randomize: bool) -> Vec<u32> {
        self.core.reset(randomize).to_flat()
    }

    /// Apply a batch of clicked cells, `[r0, c0, r1, c1, ...]`
    pub fn apply_toggles(&mut self, flat: Vec<u32>) -> Result<Vec<u32>, JsValue> {
        let coords = ChangeSet::from_flat(&flat).map_err(to_js)?;
        let changes = self.core.apply_toggles(coords).map_err(to_js)?;
        Ok(changes.to_flat())
    }

    pub fn load_pattern(&mut self, name: &str) -> Result<Vec<u32>, JsValue> {
        let changes = self.core.load_pattern(&self.patterns, name).map_err(to_js)?;
        Ok(changes.to_flat())
    }

    /// Merge patterns from a JSON bundle; returns how many were loaded
    pub fn load_pattern_bundle(&mut self, json: &str) -> Result<usize, JsValue> {
        self.patterns.merge_bundle_json(json).map_err(to_js)
    }

    /// Pattern names and sizes as JSON
    pub fn pattern_names(&self) -> String {
        self.patterns.manifest_json()
    }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.core.snapshot().is_alive(row, col)
    }

    /// Copy of the liveness grid, row-major (1 = alive)
    pub fn snapshot(&self) -> Vec<u8> {
        self.core.snapshot().to_vec()
    }

    /// Get pointer to liveness array (for zero-copy canvas reads).
    /// Invalidated by the next `step`.
    pub fn alive_ptr(&self) -> *const u8 {
        self.core.alive_ptr()
    }

    pub fn alive_len(&self) -> usize {
        self.core.alive_len()
    }
}
