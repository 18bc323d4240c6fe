use crate::board::{Armed, Board, Unarmed};
use crate::{
    Cell, CellGeometry, CellView, GameConfig, GameState, InputEvent, MouseButton, Position,
    Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use tracing::{info, trace};

#[derive(Debug, Clone)]
enum Field {
    Unarmed(Board<Unarmed>),
    Armed(Board<Armed>),
}

impl Field {
    fn cells(&self) -> &[Cell] {
        match self {
            Field::Unarmed(board) => board.cells(),
            Field::Armed(board) => board.cells(),
        }
    }

    fn index_of(&self, pos: Position) -> Result<usize> {
        match self {
            Field::Unarmed(board) => board.index_of(pos),
            Field::Armed(board) => board.index_of(pos),
        }
    }

    fn toggle_flag(&mut self, index: usize) -> Result<bool> {
        match self {
            Field::Unarmed(board) => board.toggle_flag(index),
            Field::Armed(board) => board.toggle_flag(index),
        }
    }

    fn derive_state(&self) -> GameState {
        match self {
            Field::Unarmed(board) => board.derive_state(),
            Field::Armed(board) => board.derive_state(),
        }
    }

    fn check_consistency(&self) {
        match self {
            Field::Unarmed(board) => board.check_consistency(),
            Field::Armed(board) => board.check_consistency(),
        }
    }
}

/// One play-through. Owns the board and turns clicks into board mutations.
///
/// Mines are placed on the first reveal, never under the clicked cell.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    field: Field,
    rng: StdRng,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same seed and same clicks give the same game.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Starts from a fixed mine layout. The first click is an ordinary reveal.
    pub fn with_layout<I>(config: GameConfig, mines: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let board = Board::new(config).place_mines_at(mines)?.count_adjacency();
        Ok(Self {
            config,
            field: Field::Armed(board),
            rng: StdRng::seed_from_u64(0),
        })
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            field: Field::Unarmed(Board::new(config)),
            rng,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width(), self.config.height())
    }

    pub fn mines_generated(&self) -> bool {
        matches!(self.field, Field::Armed(_))
    }

    pub fn cells(&self) -> &[Cell] {
        self.field.cells()
    }

    pub fn index_of(&self, pos: Position) -> Result<usize> {
        self.field.index_of(pos)
    }

    pub fn flag_count(&self) -> usize {
        self.cells().iter().filter(|cell| cell.is_flagged()).count()
    }

    /// Mines left for a counter display; negative when over-flagged.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.config.mine_count()) - self.flag_count() as i64
    }

    pub fn session_state(&self) -> GameState {
        self.field.derive_state()
    }

    /// Applies one click and returns the resulting state.
    ///
    /// Clicks on a finished session are ignored.
    pub fn handle_click(&mut self, pos: Position, button: MouseButton) -> Result<GameState> {
        let index = self.field.index_of(pos)?;
        let before = self.session_state();
        if before.is_finished() {
            trace!(?pos, ?button, ?before, "ignoring click on finished session");
            return Ok(before);
        }

        match button {
            MouseButton::Primary => {
                self.reveal(index)?;
            }
            MouseButton::Secondary => {
                if !self.field.toggle_flag(index)? {
                    trace!(?pos, "cannot flag an uncovered cell");
                }
            }
        }

        if cfg!(debug_assertions) {
            self.field.check_consistency();
        }

        let after = self.session_state();
        if after != before {
            info!(state = ?after, "session finished");
        }
        Ok(after)
    }

    /// Translates a pixel-level event and applies it. Returns `None` on quit.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        geometry: &CellGeometry,
    ) -> Result<Option<GameState>> {
        match event {
            InputEvent::Quit => Ok(None),
            InputEvent::Click {
                pixel_x,
                pixel_y,
                button,
            } => {
                let pos = geometry.to_position(pixel_x, pixel_y);
                self.handle_click(pos, button).map(Some)
            }
        }
    }

    fn reveal(&mut self, index: usize) -> Result<BTreeSet<usize>> {
        match &mut self.field {
            Field::Armed(board) => board.reveal(index),
            Field::Unarmed(board) => {
                if board.cell(index)?.is_flagged() {
                    trace!(index, "flagged cells cannot be revealed");
                    return Ok(BTreeSet::new());
                }

                let mut armed = board
                    .clone()
                    .place_mines(index, &mut self.rng)?
                    .count_adjacency();
                let uncovered = armed.reveal_opening(index)?;
                self.field = Field::Armed(armed);
                Ok(uncovered)
            }
        }
    }

    /// What a presenter should draw at `index`.
    ///
    /// Panics if the cell is both uncovered and flagged.
    pub fn visual_state(&self, index: usize) -> Result<CellView> {
        let (cell, count) = match &self.field {
            Field::Unarmed(board) => (*board.cell(index)?, 0),
            Field::Armed(board) => (*board.cell(index)?, board.adjacency_count(index)?),
        };
        cell.check(index);

        Ok(if cell.is_flagged() {
            CellView::Flagged
        } else if cell.is_covered() {
            CellView::Covered
        } else if cell.is_mine() {
            CellView::ExplodedMine
        } else {
            CellView::uncovered_safe(index, count)
        })
    }

    pub fn visual_state_at(&self, pos: Position) -> Result<CellView> {
        self.visual_state(self.index_of(pos)?)
    }
}
