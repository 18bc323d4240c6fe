use crate::board::{Board, MinesPlaced, Unarmed};
use crate::{GameError, Result};
use itertools::Itertools;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

impl Board<Unarmed> {
    /// Scatters `mine_count` mines uniformly over every cell except `exclude_index`.
    ///
    /// Draws are rejection-sampled: a draw equal to `exclude_index` or to an
    /// already chosen index is discarded, so every other cell is equally likely.
    pub fn place_mines<R: Rng + ?Sized>(
        mut self,
        exclude_index: usize,
        rng: &mut R,
    ) -> Result<Board<MinesPlaced>> {
        let total = self.len();
        if exclude_index >= total {
            return Err(GameError::IndexOutOfRange(exclude_index));
        }

        let wanted = self.mine_count() as usize;
        let mut mines = HashSet::with_capacity(wanted);
        while mines.len() < wanted {
            let index = rng.gen_range(0..total);
            if index != exclude_index {
                mines.insert(index);
            }
        }

        for &index in &mines {
            self.cells[index].set_mine();
        }

        debug!(mines = wanted, exclude_index, "placed mines");
        Ok(self.into_phase(MinesPlaced))
    }

    /// Places mines at exactly the given indices. Duplicates are collapsed, and the
    /// distinct count must match the configured mine count.
    pub fn place_mines_at<I>(mut self, indices: I) -> Result<Board<MinesPlaced>>
    where
        I: IntoIterator<Item = usize>,
    {
        let mines: Vec<usize> = indices.into_iter().unique().collect();
        if let Some(&index) = mines.iter().find(|&&index| index >= self.len()) {
            return Err(GameError::IndexOutOfRange(index));
        }

        let expected = self.mine_count();
        if mines.len() != expected as usize {
            return Err(GameError::MineCountMismatch {
                expected,
                actual: mines.len() as u32,
            });
        }

        for index in mines {
            self.cells[index].set_mine();
        }

        debug!(mines = expected, "placed mines from fixed layout");
        Ok(self.into_phase(MinesPlaced))
    }
}
