//! Cell coordinates and ordered change lists handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

/// (row, col) on the board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Cells whose liveness flipped, in the order they were flipped.
///
/// `step`, `clear` and `reset` emit row-major order; `apply_toggles` echoes
/// the caller's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    cells: Vec<Coord>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cells: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn push(&mut self, coord: Coord) {
        self.cells.push(coord);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.cells
    }

    /// Flattened `[r0, c0, r1, c1, ...]` for crossing the JS boundary.
    pub fn to_flat(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.cells.len() * 2);
        for c in &self.cells {
            out.push(c.row);
            out.push(c.col);
        }
        out
    }

    /// Inverse of `to_flat`. Odd-length input is rejected.
    pub fn from_flat(flat: &[u32]) -> Result<Self> {
        if flat.len() % 2 != 0 {
            return Err(EngineError::InvalidBundle(format!(
                "coordinate list has odd length {}",
                flat.len()
            )));
        }
        Ok(flat
            .chunks_exact(2)
            .map(|pair| Coord::new(pair[0], pair[1]))
            .collect())
    }
}

impl FromIterator<Coord> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl IntoIterator for ChangeSet {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
