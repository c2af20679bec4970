use crate::*;
pub use random::*;

mod random;

/// Strategy seam for mine placement. The config is validated on construction,
/// so implementations can rely on `mines < total_cells`.
pub trait BoardGenerator {
    fn generate(self, config: BoardConfig) -> Board;
}
