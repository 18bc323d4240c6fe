mod adjacency;
pub mod board;
pub mod cell;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
mod placement;
pub mod position;
mod reveal;
pub mod session;
mod state;

pub use board::{Armed, Board, MinesPlaced, Phase, Unarmed};
pub use cell::{Cell, CellView};
pub use config::GameConfig;
pub use driver::{run, Presenter};
pub use error::{GameError, InvariantViolation, Result};
pub use input::{CellGeometry, InputEvent, InputSource, MouseButton};
pub use position::Position;
pub use session::Session;
pub use state::GameState;
