use serde::{Deserialize, Serialize};

/// Ground-truth content of one cell, fixed at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// No adjacent mines.
    Empty,
    /// Exactly this many adjacent mines, always in `1..=8`.
    Count(u8),
    Mine,
}

impl CellKind {
    pub(crate) const fn from_adjacent_mines(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            n => Self::Count(n),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Player-visible state of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Disclosed(CellKind),
}

impl VisibleCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_disclosed(self) -> bool {
        matches!(self, Self::Disclosed(_))
    }
}

impl Default for VisibleCell {
    fn default() -> Self {
        Self::Hidden
    }
}
