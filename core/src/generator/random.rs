use ndarray::Array2;

use super::*;

/// Uniform rejection sampler: draws random coordinates, re-drawing on cells
/// already holding a mine, until the requested count is placed. Expected
/// re-draws stay low while mine density is well below 1; the validated config
/// guarantees termination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let (width, height) = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut placed: CellCount = 0;
        let mut draws: u32 = 0;
        while placed < config.mines() {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            draws += 1;

            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                continue;
            }
            *cell = true;
            placed += 1;
        }

        log::debug!(
            "placed {} mines on a {}x{} board in {} draws",
            placed,
            width,
            height,
            draws
        );
        Board::from_mine_mask(mine_mask).expect("mask axes come from a validated config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(size: Coord2, mines: CellCount, seed: u64) -> Board {
        let config = BoardConfig::new(size, mines).unwrap();
        RandomBoardGenerator::new(seed).generate(config)
    }

    fn count_mines(board: &Board) -> CellCount {
        let (width, height) = board.size();
        let mut count = 0;
        for x in 0..width {
            for y in 0..height {
                if board[(x, y)].is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..8 {
            let board = generate((9, 7), 20, seed);
            assert_eq!(count_mines(&board), 20);
            assert_eq!(board.mine_count(), 20);
        }
    }

    #[test]
    fn every_count_matches_its_neighborhood() {
        let board = generate((8, 8), 15, 99);
        let (width, height) = board.size();

        for x in 0..width {
            for y in 0..height {
                let kind = board[(x, y)];
                if kind.is_mine() {
                    continue;
                }
                let adjacent: u8 = crate::neighbors((x, y), board.size())
                    .filter(|&pos| board[pos].is_mine())
                    .count()
                    .try_into()
                    .unwrap();
                match kind {
                    CellKind::Empty => assert_eq!(adjacent, 0),
                    CellKind::Count(n) => assert_eq!(adjacent, n),
                    CellKind::Mine => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let first = generate((12, 12), 30, 7);
        let second = generate((12, 12), 30, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn mineless_board_generates_all_empty() {
        let board = generate((3, 3), 0, 0);
        assert_eq!(count_mines(&board), 0);
        assert_eq!(board[(1, 1)], CellKind::Empty);
    }

    #[test]
    fn near_full_density_still_terminates() {
        let board = generate((4, 4), 15, 3);
        assert_eq!(count_mines(&board), 15);
    }
}
