use crate::InvariantViolation;

/// State of one grid position.
///
/// The fields are private so that a cell can never be both uncovered and flagged:
/// [`Cell::uncover`] refuses flagged cells and [`Cell::toggle_flag`] refuses uncovered ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    uncovered: bool,
    flagged: bool,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    pub fn is_uncovered(&self) -> bool {
        self.uncovered
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn is_covered(&self) -> bool {
        !self.uncovered
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    /// Returns true if the cell went from covered to uncovered.
    pub(crate) fn uncover(&mut self) -> bool {
        if self.uncovered || self.flagged {
            return false;
        }
        self.uncovered = true;
        true
    }

    /// Returns true if the flag changed.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.uncovered {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }

    /// Panics if the cell is both uncovered and flagged.
    pub(crate) fn check(&self, index: usize) {
        if self.uncovered && self.flagged {
            panic!("{}", InvariantViolation::InvalidCellState { index });
        }
    }
}

/// What a presenter should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellView {
    Covered,
    Flagged,
    ExplodedMine,
    /// Uncovered with no adjacent mines.
    Blank,
    /// Uncovered with 1..=8 adjacent mines.
    Numbered(u8),
}

impl CellView {
    pub(crate) fn uncovered_safe(index: usize, count: u8) -> Self {
        match count {
            0 => CellView::Blank,
            1..=8 => CellView::Numbered(count),
            _ => panic!("{}", InvariantViolation::CountOutOfRange { index, count }),
        }
    }
}
