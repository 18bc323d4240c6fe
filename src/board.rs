use crate::{Cell, GameConfig, GameError, Position, Result};

mod sealed {
    pub trait Sealed {}
}

/// Lifecycle stage of a [`Board`]. Transitions consume the board, so a stage can
/// never be entered twice.
pub trait Phase: sealed::Sealed {
    const MINES_GENERATED: bool;
}

/// No mines yet. Cells may be flagged but not revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unarmed;

/// Mines are placed; adjacency counts are still missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinesPlaced;

/// Mines and adjacency counts are known; the board can be revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armed {
    pub(crate) counts: Vec<u8>,
}

impl sealed::Sealed for Unarmed {}
impl sealed::Sealed for MinesPlaced {}
impl sealed::Sealed for Armed {}

impl Phase for Unarmed {
    const MINES_GENERATED: bool = false;
}

impl Phase for MinesPlaced {
    const MINES_GENERATED: bool = true;
}

impl Phase for Armed {
    const MINES_GENERATED: bool = true;
}

/// Row-major grid of cells; index is `x + width * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<P: Phase> {
    config: GameConfig,
    pub(crate) cells: Vec<Cell>,
    pub(crate) phase: P,
}

impl Board<Unarmed> {
    pub fn new(config: GameConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::default(); config.total_cells()],
            phase: Unarmed,
        }
    }
}

impl<P: Phase> Board<P> {
    pub(crate) fn into_phase<Q: Phase>(self, phase: Q) -> Board<Q> {
        Board {
            config: self.config,
            cells: self.cells,
            phase,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width(), self.config.height())
    }

    pub fn mine_count(&self) -> u32 {
        self.config.mine_count()
    }

    pub fn mines_generated(&self) -> bool {
        P::MINES_GENERATED
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(GameError::IndexOutOfRange(index))
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        let (width, height) = self.dimensions();
        pos.x >= 0 && (pos.x as u32) < width && pos.y >= 0 && (pos.y as u32) < height
    }

    pub fn index_of(&self, pos: Position) -> Result<usize> {
        if !self.is_within_bounds(pos) {
            return Err(GameError::OutOfRange { x: pos.x, y: pos.y });
        }
        Ok(pos.x as usize + self.config.width() as usize * pos.y as usize)
    }

    pub fn position_of(&self, index: usize) -> Result<Position> {
        if index >= self.cells.len() {
            return Err(GameError::IndexOutOfRange(index));
        }
        let width = self.config.width() as usize;
        Ok(Position::new((index % width) as i32, (index / width) as i32))
    }

    /// Cells at Chebyshev distance 1, clipped at the edges.
    pub fn neighbors_8(&self, index: usize) -> Result<Vec<usize>> {
        let pos = self.position_of(index)?;
        Ok(pos
            .neighbors()
            .filter_map(|p| self.index_of(p).ok())
            .collect())
    }

    /// Orthogonally adjacent cells, clipped at the edges.
    pub fn neighbors_4(&self, index: usize) -> Result<Vec<usize>> {
        let pos = self.position_of(index)?;
        Ok(pos
            .orthogonal_neighbors()
            .filter_map(|p| self.index_of(p).ok())
            .collect())
    }

    /// Flags or unflags a covered cell. Returns whether anything changed.
    pub fn toggle_flag(&mut self, index: usize) -> Result<bool> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange(index))?;
        Ok(cell.toggle_flag())
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged()).count()
    }

    pub(crate) fn check_consistency(&self) {
        for (index, cell) in self.cells.iter().enumerate() {
            cell.check(index);
        }
    }
}
