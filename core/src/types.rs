/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion from board coordinates to an `ndarray` index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a `width x height` board. Never overflows: the axis type
/// caps each side at 255.
pub const fn area(width: Coord, height: Coord) -> CellCount {
    width as CellCount * height as CellCount
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Up-to-8 in-bounds neighbors of `center` on a board of size `bounds`.
pub(crate) fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .iter()
        .filter_map(move |&delta| offset(center, delta, bounds))
}

fn offset(coords: Coord2, (dx, dy): (i8, i8), (max_x, max_y): Coord2) -> Option<Coord2> {
    let x = coords.0.checked_add_signed(dx)?;
    let y = coords.1.checked_add_signed(dy)?;
    (x < max_x && y < max_y).then_some((x, y))
}
