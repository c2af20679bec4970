use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player can see: the only grid the presentation layer renders.
///
/// Starts all-hidden; cells move from `Hidden` to `Disclosed` and never back.
/// The mutating operation is crate-private, so outside the crate this grid is
/// read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibleGrid {
    cells: Array2<VisibleCell>,
}

impl VisibleGrid {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    /// Number of cells still hidden. The win rule compares this against the
    /// board's mine count.
    pub fn hidden_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_hidden())
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn disclose(&mut self, coords: Coord2, kind: CellKind) {
        self.cells[coords.to_nd_index()] = VisibleCell::Disclosed(kind);
    }
}

impl Index<Coord2> for VisibleGrid {
    type Output = VisibleCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_fully_hidden() {
        let grid = VisibleGrid::new((4, 3));
        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.hidden_count(), 12);
        assert_eq!(grid[(3, 2)], VisibleCell::Hidden);
    }

    #[test]
    fn disclosing_lowers_hidden_count() {
        let mut grid = VisibleGrid::new((2, 2));
        grid.disclose((0, 1), CellKind::Count(2));

        assert_eq!(grid.hidden_count(), 3);
        assert_eq!(grid[(0, 1)], VisibleCell::Disclosed(CellKind::Count(2)));
    }
}
