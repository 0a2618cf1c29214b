use super::*;

impl Grid {
    /// Flip (row, col) and return its new state. Off-board cells are
    /// rejected with `OutOfBounds` and leave the grid untouched.
    #[inline]
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<bool> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        Ok(self.toggle_index(idx))
    }

    /// Flip cell `idx` (must be `< size`), keeping neighbor counts, row occupancy and the live
    /// total in step with it.
    pub(crate) fn toggle_index(&mut self, idx: usize) -> bool {
        let (row, col) = self.coords(idx);
        let birth = *fast!(self.alive, [idx]) == 0;
        fast!(self.alive, [idx] = birth as u8);

        for n in self.neighbor_indices(row, col) {
            let count = *fast!(self.neighbors, [n]);
            debug_assert!(
                if birth { count < 8 } else { count > 0 },
                "neighbor count out of range at {}",
                n
            );
            fast!(self.neighbors, [n] = if birth { count + 1 } else { count - 1 });
        }

        if birth {
            self.mark_row_live(row);
            self.live_count += 1;
        } else {
            self.mark_row_dead(row);
            self.live_count -= 1;
        }
        birth
    }

    /// Neighbor counts computed from scratch off `alive`. Test/debug aid for
    /// checking the incremental counts.
    pub fn recount_neighbors(&self) -> Vec<u8> {
        let mut counts = vec![0u8; self.size];
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                counts[idx] = self
                    .neighbor_indices(row, col)
                    .iter()
                    .map(|&n| self.alive[n])
                    .sum();
            }
        }
        counts
    }

    pub fn neighbor_counts_consistent(&self) -> bool {
        self.recount_neighbors() == self.neighbors
    }
}
