use crate::board::{Board, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

impl<P: Phase> Board<P> {
    /// Derives the session outcome from the cells alone.
    ///
    /// `Lost` once any mine is uncovered, `Won` once every other cell is.
    pub fn derive_state(&self) -> GameState {
        let mut won = true;
        for cell in self.cells() {
            match (cell.is_mine(), cell.is_uncovered()) {
                (true, true) => return GameState::Lost,
                (false, false) => won = false,
                _ => {}
            }
        }

        if won {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Armed;
    use crate::GameConfig;

    fn armed(width: u32, height: u32, mines: &[usize]) -> Board<Armed> {
        let config = GameConfig::new(width, height, mines.len() as u32).unwrap();
        Board::new(config)
            .place_mines_at(mines.iter().copied())
            .unwrap()
            .count_adjacency()
    }

    #[test]
    fn test_fresh_board_is_playing() {
        let board = Board::new(GameConfig::new(2, 2, 1).unwrap());
        assert_eq!(board.derive_state(), GameState::Playing);
    }

    #[test]
    fn test_all_safe_cells_uncovered_wins() {
        let mut board = armed(2, 1, &[1]);
        board.reveal(0).unwrap();
        assert_eq!(board.derive_state(), GameState::Won);
    }

    #[test]
    fn test_flagged_mines_do_not_block_a_win() {
        let mut board = armed(2, 1, &[1]);
        board.toggle_flag(1).unwrap();
        board.reveal(0).unwrap();
        assert_eq!(board.derive_state(), GameState::Won);
    }

    #[test]
    fn test_uncovered_mine_loses() {
        let mut board = armed(3, 1, &[2]);
        board.reveal(2).unwrap();
        assert_eq!(board.derive_state(), GameState::Lost);
    }

    #[test]
    fn test_partial_progress_is_playing() {
        // . . * . .
        let mut board = armed(5, 1, &[2]);
        board.reveal(0).unwrap();
        assert_eq!(board.derive_state(), GameState::Playing);
    }

    #[test]
    fn test_finished_states() {
        assert!(!GameState::Playing.is_finished());
        assert!(GameState::Won.is_finished());
        assert!(GameState::Lost.is_finished());
    }
}
