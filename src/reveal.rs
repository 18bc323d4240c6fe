use crate::board::{Armed, Board};
use crate::Result;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

impl Board<Armed> {
    /// Uncovers `start` and, if it has no adjacent mines, floods outward.
    ///
    /// Returns the newly uncovered cells. Uncovered or flagged cells are left alone.
    /// A mine is uncovered on its own and nothing else opens.
    pub fn reveal(&mut self, start: usize) -> Result<BTreeSet<usize>> {
        self.uncover_from(start, false)
    }

    /// Like [`Board::reveal`], but always floods, even when `start` itself has a
    /// nonzero count. Used for the first click of a session.
    pub fn reveal_opening(&mut self, start: usize) -> Result<BTreeSet<usize>> {
        self.uncover_from(start, true)
    }

    fn uncover_from(&mut self, start: usize, force: bool) -> Result<BTreeSet<usize>> {
        let mut uncovered = BTreeSet::new();
        let cell = *self.cell(start)?;
        if cell.is_uncovered() || cell.is_flagged() {
            return Ok(uncovered);
        }

        self.cells[start].uncover();
        uncovered.insert(start);

        if cell.is_mine() {
            debug!(index = start, "uncovered a mine");
            return Ok(uncovered);
        }

        if force || self.phase.counts[start] == 0 {
            self.cascade(start, &mut uncovered)?;
        }

        debug!(index = start, uncovered = uncovered.len(), "revealed");
        Ok(uncovered)
    }

    /// Orthogonal flood fill. Mines and flagged cells are never entered; cells with a
    /// nonzero count are opened but do not spread further.
    fn cascade(&mut self, start: usize, uncovered: &mut BTreeSet<usize>) -> Result<()> {
        let mut closed = HashSet::from([start]);
        let mut open = vec![start];

        while let Some(current) = open.pop() {
            for neighbor in self.neighbors_4(current)? {
                let cell = self.cells[neighbor];
                if closed.contains(&neighbor) || cell.is_mine() || cell.is_flagged() {
                    continue;
                }
                closed.insert(neighbor);

                if self.cells[neighbor].uncover() {
                    uncovered.insert(neighbor);
                }
                if self.phase.counts[neighbor] == 0 {
                    open.push(neighbor);
                }
            }
        }

        Ok(())
    }
}
