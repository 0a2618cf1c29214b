//! Grid - toroidal cell arena, Structure of Arrays
//!
//! Instead of: Vec<Vec<Square>> with a ghost border pushed/unshifted around it
//! We have:    alive[], neighbors[] over H*W cells + precomputed wrap tables
//!
//! Neighbor lookups go through `row_above/row_below/col_left/col_right`, so
//! edges and corners take exactly the same path as interior cells and no
//! border has to be rebuilt when the storage is swapped.
//!
//! Invariant: `neighbors[i]` == number of live cells among the 8 toroidal
//! neighbors of `i`. Every write to `alive` goes through `toggle_index`.

use crate::core::{EngineError, Result};

mod indexing;
mod neighbors;
mod sparse;

/// Smallest edge for which the 8 neighbors of a cell are 8 distinct cells.
pub const MIN_DIMENSION: u32 = 3;

/// Largest board, in cells. Cell indices and counts must fit in `u32`, which
/// also keeps `height * width` inside a 32-bit `usize` on wasm32.
pub const MAX_CELLS: u64 = u32::MAX as u64;

/// Validate board dimensions and return the cell count.
pub fn check_dimensions(height: u32, width: u32) -> Result<usize> {
    if height < MIN_DIMENSION || width < MIN_DIMENSION {
        return Err(EngineError::InvalidDimension { height, width });
    }
    let cells = u64::from(height) * u64::from(width);
    if cells > MAX_CELLS {
        return Err(EngineError::InvalidDimension { height, width });
    }
    usize::try_from(cells).map_err(|_| EngineError::InvalidDimension { height, width })
}

#[derive(Clone)]
pub struct Grid {
    height: u32,
    width: u32,
    size: usize,

    pub(crate) alive: Vec<u8>,     // 1 = alive, 0 = dead
    pub(crate) neighbors: Vec<u8>, // live neighbor count, 0..=8

    // Wrap tables: wrapped row/col index of the adjacent line
    row_above: Vec<u32>,
    row_below: Vec<u32>,
    col_left: Vec<u32>,
    col_right: Vec<u32>,

    live_count: u32,
    row_live: Vec<u32>, // live cells per row, lets step skip dead bands
}

impl Grid {
    pub fn new(height: u32, width: u32) -> Result<Self> {
        let size = check_dimensions(height, width)?;

        Ok(Self {
            height,
            width,
            size,
            alive: vec![0; size],
            neighbors: vec![0; size],
            row_above: (0..height).map(|r| (r + height - 1) % height).collect(),
            row_below: (0..height).map(|r| (r + 1) % height).collect(),
            col_left: (0..width).map(|c| (c + width - 1) % width).collect(),
            col_right: (0..width).map(|c| (c + 1) % width).collect(),
            live_count: 0,
            row_live: vec![0; height as usize],
        })
    }

    /// Overwrite this grid's cell state with `other`'s. Both grids must share
    /// dimensions; wrap tables are left as they are.
    pub(crate) fn copy_cells_from(&mut self, other: &Grid) {
        debug_assert!(self.height == other.height && self.width == other.width);
        self.alive.copy_from_slice(&other.alive);
        self.neighbors.copy_from_slice(&other.neighbors);
        self.row_live.copy_from_slice(&other.row_live);
        self.live_count = other.live_count;
    }

    #[inline]
    pub fn live_count(&self) -> u32 {
        self.live_count
    }

    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.alive[self.index(row, col)] != 0
    }

    #[inline]
    pub fn neighbor_count(&self, row: u32, col: u32) -> u8 {
        self.neighbors[self.index(row, col)]
    }

    /// Raw liveness bytes, row-major.
    #[inline]
    pub fn alive_cells(&self) -> &[u8] {
        &self.alive
    }

    pub fn alive_ptr(&self) -> *const u8 {
        self.alive.as_ptr()
    }
}
