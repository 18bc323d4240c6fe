use crate::{GameError, Result};

/// Construction-time session parameters, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: u32,
    height: u32,
    mine_count: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, mine_count: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard { width, height });
        }

        let cells = u64::from(width) * u64::from(height);
        if cells > u64::from(u32::MAX) || u64::from(mine_count) >= cells {
            return Err(GameError::TooManyMines {
                width,
                height,
                mines: mine_count,
            });
        }

        Ok(Self {
            width,
            height,
            mine_count,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn total_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn safe_cells(&self) -> usize {
        self.total_cells() - self.mine_count as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            mine_count: 10,
        }
    }
}
