use super::*;

impl Grid {
    #[inline]
    pub(super) fn mark_row_live(&mut self, row: u32) {
        let r = row as usize;
        self.row_live[r] = self.row_live[r].saturating_add(1);
    }

    #[inline]
    pub(super) fn mark_row_dead(&mut self, row: u32) {
        let r = row as usize;
        if self.row_live[r] > 0 {
            self.row_live[r] -= 1;
        }
    }

    /// True if no cell of `row` can change in the next generation: the row
    /// and both wrapped neighbor rows hold no live cells.
    #[inline]
    pub(crate) fn row_is_quiet(&self, row: u32) -> bool {
        let (up, down) = self.adjacent_rows(row);
        self.row_live[row as usize] == 0
            && self.row_live[up as usize] == 0
            && self.row_live[down as usize] == 0
    }
}
