use crate::domain::Coord;
use crate::grid::Grid;

/// Read-only view of the current generation. Borrowing the engine means it
/// cannot outlive the next mutating call.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn live_count(&self) -> u32 {
        self.grid.live_count()
    }

    /// Liveness of (row, col); cells off the board read as dead.
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.grid.in_bounds(row, col) && self.grid.is_alive(row, col)
    }

    pub fn neighbor_count(&self, row: u32, col: u32) -> Option<u8> {
        self.grid
            .in_bounds(row, col)
            .then(|| self.grid.neighbor_count(row, col))
    }

    /// Row-major liveness bytes (1 = alive).
    pub fn as_bytes(&self) -> &'a [u8] {
        self.grid.alive_cells()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + 'a {
        let grid = self.grid;
        grid.alive_cells()
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a != 0)
            .map(move |(idx, _)| {
                let (row, col) = grid.coords(idx);
                Coord::new(row, col)
            })
    }
}
