use crate::{CellGeometry, GameError, GameState, InputEvent, InputSource, Session};
use tracing::debug;

/// Draws a session. Called once up front and again after every handled event.
pub trait Presenter {
    type Error: From<GameError>;

    fn present(&mut self, session: &Session) -> Result<(), Self::Error>;
}

/// Pulls events from `input` until it quits or runs dry, presenting after each one.
///
/// Click errors are handed back to the caller, not clamped or skipped.
pub fn run<I, P>(
    session: &mut Session,
    input: &mut I,
    presenter: &mut P,
    geometry: &CellGeometry,
) -> Result<GameState, P::Error>
where
    I: InputSource + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.present(session)?;

    while let Some(event) = input.next_event() {
        if session.handle_event(event, geometry)?.is_none() {
            debug!("quit requested");
            break;
        }
        presenter.present(session)?;
    }

    Ok(session.session_state())
}
