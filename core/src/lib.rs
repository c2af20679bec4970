#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use visible::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;
mod visible;

/// Validated board dimensions and mine count.
///
/// Construction enforces `mines < width * height`, which also rules out
/// zero-area boards. The generator only accepts a value of this type, so an
/// infeasible mine count can never reach the sampling loop.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if mines < area(size.0, size.1) {
            Ok(Self { size, mines })
        } else {
            Err(GameError::InvalidConfig)
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: (10, 10),
            mines: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_and_overfull_boards() {
        assert_eq!(BoardConfig::new((3, 3), 9), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((3, 3), 10), Err(GameError::InvalidConfig));
        assert!(BoardConfig::new((3, 3), 8).is_ok());
    }

    #[test]
    fn config_rejects_zero_area() {
        assert_eq!(BoardConfig::new((0, 5), 0), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((5, 0), 0), Err(GameError::InvalidConfig));
    }

    #[test]
    fn mineless_config_is_valid() {
        let config = BoardConfig::new((4, 2), 0).unwrap();
        assert_eq!(config.mines(), 0);
        assert_eq!(config.total_cells(), 8);
    }

    #[test]
    fn default_config_is_ten_by_ten_with_five_mines() {
        let config = BoardConfig::default();
        assert_eq!(config.size(), (10, 10));
        assert_eq!(config.mines(), 5);
    }
}
