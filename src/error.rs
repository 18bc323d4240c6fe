use thiserror::Error;

/// Errors a caller can get back from the engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Position ({x}, {y}) is out of range")]
    OutOfRange { x: i32, y: i32 },
    #[error("Cell index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("Too many mines ({mines}) for board size {width}x{height}")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("Board size {width}x{height} has no cells")]
    EmptyBoard { width: u32, height: u32 },
    #[error("Layout has {actual} distinct mines but the board expects {expected}")]
    MineCountMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Broken internal consistency. Never returned, only raised as a panic message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Cell {index} is both uncovered and flagged")]
    InvalidCellState { index: usize },
    #[error("Cell {index} has {count} adjacent mines, expected 0..=8")]
    CountOutOfRange { index: usize, count: u8 },
}
