use wasm_bindgen::prelude::*;

/// Snapshot of the last `step` (zeros while perf metrics are off).
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) rows_skipped: u32,
    pub(super) live_cells: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
    pub(super) generation: u64,
}

/// Counter value for JS; sizes past `u32::MAX` pin to the max.
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            step_ms: 0.0,
            births: 0,
            deaths: 0,
            rows_skipped: 0,
            live_cells: 0,
            grid_size: 0,
            memory_bytes: 0,
            generation: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn rows_skipped(&self) -> u32 { self.rows_skipped }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
