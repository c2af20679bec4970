use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable ground truth: the kind of every cell, derived once from a mine
/// placement. Read access only; no mutation path exists after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellKind>,
    mines: CellCount,
}

impl Board {
    /// Derives a full board from a mine mask: mines keep their kind, every
    /// other cell gets its 8-neighbor adjacency count (out-of-board neighbors
    /// count as absent). Fails when either axis exceeds the coordinate range.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let dim = mine_mask.dim();
        let bounds: Coord2 = (
            dim.0.try_into().map_err(|_| GameError::InvalidConfig)?,
            dim.1.try_into().map_err(|_| GameError::InvalidConfig)?,
        );

        let mut cells = Array2::from_elem(dim, CellKind::Empty);
        for x in 0..bounds.0 {
            for y in 0..bounds.1 {
                let coords = (x, y);
                cells[coords.to_nd_index()] = if mine_mask[coords.to_nd_index()] {
                    CellKind::Mine
                } else {
                    let adjacent = neighbors(coords, bounds)
                        .filter(|&pos| mine_mask[pos.to_nd_index()])
                        .count();
                    CellKind::from_adjacent_mines(adjacent.try_into().unwrap())
                };
            }
        }

        let mines = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Ok(Self { cells, mines })
    }

    /// Deterministic construction from an explicit mine set.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfRange);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }
}

impl Index<Coord2> for Board {
    type Output = CellKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
