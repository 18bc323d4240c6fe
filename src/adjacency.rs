use crate::board::{Armed, Board, MinesPlaced};
use crate::{GameError, Result};
use tracing::debug;

impl Board<MinesPlaced> {
    /// Counts the mines among every cell's eight neighbors, once.
    pub fn count_adjacency(self) -> Board<Armed> {
        let counts = (0..self.len())
            .map(|index| self.count_cell(index))
            .collect::<Vec<_>>();

        debug!(cells = counts.len(), "counted adjacent mines");
        self.into_phase(Armed { counts })
    }

    fn count_cell(&self, index: usize) -> u8 {
        self.neighbors_8(index)
            .map(|neighbors| {
                neighbors
                    .into_iter()
                    .filter(|&n| self.cells[n].is_mine())
                    .count() as u8
            })
            .unwrap_or(0)
    }
}

impl Board<Armed> {
    /// Mines among the eight neighbors. Only meaningful for non-mine cells.
    pub fn adjacency_count(&self, index: usize) -> Result<u8> {
        self.phase
            .counts
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange(index))
    }

    pub fn adjacency_counts(&self) -> &[u8] {
        &self.phase.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Position};
    use itertools::iproduct;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn armed(width: u32, height: u32, mines: &[usize]) -> Board<Armed> {
        let config = GameConfig::new(width, height, mines.len() as u32).unwrap();
        Board::new(config)
            .place_mines_at(mines.iter().copied())
            .unwrap()
            .count_adjacency()
    }

    /// Counts mines in the 3x3 window around `index`, straight from coordinates.
    fn brute_force_count(board: &Board<Armed>, index: usize) -> u8 {
        let center = board.position_of(index).unwrap();
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .map(|(dx, dy)| Position::new(center.x + dx, center.y + dy))
            .filter_map(|pos| board.index_of(pos).ok())
            .filter(|&n| board.cell(n).unwrap().is_mine())
            .count() as u8
    }

    #[test]
    fn test_counts_around_single_mine() {
        // . . .
        // . * .
        // . . .
        let board = armed(3, 3, &[4]);
        assert_eq!(board.adjacency_counts(), &[1, 1, 1, 1, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_counts_include_diagonals() {
        // * . .
        // . . .
        // . . *
        let board = armed(3, 3, &[0, 8]);
        assert_eq!(board.adjacency_count(4).unwrap(), 2);
        assert_eq!(board.adjacency_count(2).unwrap(), 0);
        assert_eq!(board.adjacency_count(1).unwrap(), 1);
    }

    #[test]
    fn test_fully_surrounded_cell_counts_eight() {
        let board = armed(3, 3, &[0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.adjacency_count(4).unwrap(), 8);
    }

    #[test]
    fn test_count_out_of_range() {
        let board = armed(2, 2, &[]);
        assert_eq!(
            board.adjacency_count(4),
            Err(GameError::IndexOutOfRange(4))
        );
    }

    proptest! {
        #[test]
        fn prop_counts_match_brute_force(
            width in 1u32..10,
            height in 1u32..10,
            mines in 0u32..20,
            seed in any::<u64>(),
        ) {
            let total = width * height;
            let mines = mines.min(total - 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(GameConfig::new(width, height, mines).unwrap())
                .place_mines(0, &mut rng)
                .unwrap()
                .count_adjacency();

            prop_assert_eq!(board.adjacency_counts().len(), total as usize);
            for index in 0..board.len() {
                prop_assert_eq!(
                    board.adjacency_count(index).unwrap(),
                    brute_force_count(&board, index)
                );
            }
        }
    }
}
