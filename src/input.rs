use crate::Position;
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Reveal.
    Primary,
    /// Toggle flag.
    Secondary,
}

/// A discrete event from whatever is driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Click {
        pixel_x: i32,
        pixel_y: i32,
        button: MouseButton,
    },
}

/// Size of one drawn cell, used to turn pixel coordinates into grid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    cell_size: NonZeroU32,
}

impl CellGeometry {
    pub const DEFAULT_CELL_SIZE: u32 = 16;

    pub fn new(cell_size: NonZeroU32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size.get()
    }

    /// Floors toward negative infinity, so pixels left of or above the board land
    /// on negative coordinates instead of cell 0.
    pub fn to_position(&self, pixel_x: i32, pixel_y: i32) -> Position {
        let size = i64::from(self.cell_size.get());
        let x = i64::from(pixel_x).div_euclid(size);
        let y = i64::from(pixel_y).div_euclid(size);
        Position::new(x as i32, y as i32)
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            cell_size: NonZeroU32::new(Self::DEFAULT_CELL_SIZE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Source of input events, polled once per step. `None` means no more input.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl<I> InputSource for I
where
    I: Iterator<Item = InputEvent>,
{
    fn next_event(&mut self) -> Option<InputEvent> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_translation() {
        let geometry = CellGeometry::default();
        assert_eq!(geometry.to_position(0, 0), Position::new(0, 0));
        assert_eq!(geometry.to_position(15, 16), Position::new(0, 1));
        assert_eq!(geometry.to_position(47, 33), Position::new(2, 2));
    }

    #[test]
    fn test_negative_pixels_stay_negative() {
        let geometry = CellGeometry::default();
        assert_eq!(geometry.to_position(-1, 5), Position::new(-1, 0));
    }

    #[test]
    fn test_unit_geometry_is_identity() {
        let geometry = CellGeometry::new(NonZeroU32::MIN);
        assert_eq!(geometry.to_position(7, 3), Position::new(7, 3));
    }

    #[test]
    fn test_iterators_are_input_sources() {
        let mut source = vec![InputEvent::Quit].into_iter();
        assert_eq!(source.next_event(), Some(InputEvent::Quit));
        assert_eq!(source.next_event(), None);
    }
}
