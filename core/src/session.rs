use alloc::collections::VecDeque;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a click, also stored as the session's current state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Lost,
    Won,
}

impl GameOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Per-cell disclosure result; `|` keeps the strongest effect.
#[derive(Copy, Clone, Debug, PartialEq)]
enum DiscloseOutcome {
    NoChange,
    Disclosed,
    Exploded,
}

impl BitOr for DiscloseOutcome {
    type Output = DiscloseOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use DiscloseOutcome::*;
        match (self, rhs) {
            (Exploded, _) | (_, Exploded) => Exploded,
            (Disclosed, _) | (_, Disclosed) => Disclosed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// One game session: the ground truth plus the player's view of it.
///
/// `reveal` is the only mutating operation; `&mut self` serializes clicks on
/// a session, and independent sessions are fully isolated values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    visible: VisibleGrid,
    outcome: GameOutcome,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            visible: VisibleGrid::new(size),
            outcome: GameOutcome::default(),
        }
    }

    pub fn from_config(config: BoardConfig, generator: impl BoardGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn visible(&self) -> &VisibleGrid {
        &self.visible
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.visible[coords]
    }

    /// Applies one click.
    ///
    /// Out-of-range coordinates fail without mutation. After the session has
    /// ended, clicks mutate nothing and return the stored outcome. Clicking
    /// an already-disclosed cell is a no-op. A direct click on a mine loses
    /// and discloses the whole board; revealing an `Empty` cell cascades
    /// through its neighborhood.
    pub fn reveal(&mut self, coords: Coord2) -> Result<GameOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.outcome.is_terminal() {
            return Ok(self.outcome);
        }

        if self.disclose(coords) == DiscloseOutcome::Exploded {
            log::debug!("mine hit at {:?}", coords);
            // the outcome is decided before the board-wide disclosure starts
            self.outcome = GameOutcome::Lost;
            self.disclose_all();
            return Ok(self.outcome);
        }

        if self.visible.hidden_count() == self.board.mine_count() {
            log::debug!("all safe cells disclosed, session won");
            self.outcome = GameOutcome::Won;
        }
        Ok(self.outcome)
    }

    /// Discloses one cell. For an `Empty` cell the cascade walks an explicit
    /// frontier of non-mine neighbors, merging the per-cell results; mine
    /// neighbors are never enqueued, so a cascade can never explode. The
    /// frontier keeps call depth flat even when the empty region spans a
    /// whole maximum-size board, and it drains because disclosure is
    /// monotonic: each cell is disclosed at most once.
    fn disclose(&mut self, coords: Coord2) -> DiscloseOutcome {
        use DiscloseOutcome::*;

        if self.visible[coords].is_disclosed() {
            return NoChange;
        }

        let kind = self.board[coords];
        if kind.is_mine() {
            return Exploded;
        }

        log::trace!("disclosing {:?} as {:?}", coords, kind);
        self.visible.disclose(coords, kind);

        if !kind.is_empty() {
            return Disclosed;
        }

        let mut merged = Disclosed;
        let mut to_visit: VecDeque<_> = self
            .board
            .iter_neighbors(coords)
            .filter(|&pos| !self.board[pos].is_mine())
            .collect();

        while let Some(pos) = to_visit.pop_front() {
            if self.visible[pos].is_disclosed() {
                continue;
            }

            let pos_kind = self.board[pos];
            log::trace!("disclosing {:?} as {:?}", pos, pos_kind);
            self.visible.disclose(pos, pos_kind);
            merged = merged | Disclosed;

            if pos_kind.is_empty() {
                to_visit.extend(self.board.iter_neighbors(pos).filter(|&next| {
                    !self.board[next].is_mine() && !self.visible[next].is_disclosed()
                }));
            }
        }

        merged
    }

    fn disclose_all(&mut self) {
        let (width, height) = self.board.size();
        for x in 0..width {
            for y in 0..height {
                self.visible.disclose((x, y), self.board[(x, y)]);
            }
        }
    }
}
