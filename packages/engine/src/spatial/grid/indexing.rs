use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx / self.width as usize) as u32;
        let col = (idx % self.width as usize) as u32;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    pub fn check_bounds(&self, row: u32, col: u32) -> Result<()> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Indices of the 8 toroidal neighbors of (row, col), row-major around
    /// the cell.
    #[inline(always)]
    pub(crate) fn neighbor_indices(&self, row: u32, col: u32) -> [usize; 8] {
        debug_assert!(
            self.in_bounds(row, col),
            "neighbor_indices: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        let up = *fast!(self.row_above, [row as usize]);
        let down = *fast!(self.row_below, [row as usize]);
        let left = *fast!(self.col_left, [col as usize]);
        let right = *fast!(self.col_right, [col as usize]);

        [
            self.index(up, left),
            self.index(up, col),
            self.index(up, right),
            self.index(row, left),
            self.index(row, right),
            self.index(down, left),
            self.index(down, col),
            self.index(down, right),
        ]
    }

    /// Wrapped indices of the rows above and below `row`.
    #[inline]
    pub(crate) fn adjacent_rows(&self, row: u32) -> (u32, u32) {
        (self.row_above[row as usize], self.row_below[row as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_round_trip_on_edges() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.index(2, 4), 14);
        assert_eq!(grid.coords(14), (2, 4));
        assert_eq!(grid.coords(5), (1, 0));
    }

    #[test]
    fn neighbors_of_origin_wrap_both_axes() {
        let grid = Grid::new(4, 5).unwrap();
        let mut n = grid.neighbor_indices(0, 0).to_vec();
        n.sort_unstable();
        let mut expected = vec![
            grid.index(3, 4),
            grid.index(3, 0),
            grid.index(3, 1),
            grid.index(0, 4),
            grid.index(0, 1),
            grid.index(1, 4),
            grid.index(1, 0),
            grid.index(1, 1),
        ];
        expected.sort_unstable();
        assert_eq!(n, expected);
    }

    #[test]
    fn check_bounds_reports_board_size() {
        let grid = Grid::new(3, 4).unwrap();
        assert!(grid.check_bounds(2, 3).is_ok());
        assert_eq!(
            grid.check_bounds(3, 0),
            Err(EngineError::OutOfBounds { row: 3, col: 0, height: 3, width: 4 })
        );
    }
}
