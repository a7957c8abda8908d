use serde::{Deserialize, Serialize};

use crate::Connectors;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for tile counts and union-find component counts.
pub type CellCount = u16;

/// Hop count between two tiles along open connectors.
pub type Distance = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major flat index of `coords` on a board of `size`.
pub(crate) fn flat_index(coords: Coord2, size: Coord2) -> usize {
    usize::from(coords.0) * usize::from(size.1) + usize::from(coords.1)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Order in which neighbors are produced: left, right, up, down.
    pub const NEIGHBOR_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    pub const fn connector(self) -> Connectors {
        use Direction::*;
        match self {
            North => Connectors::NORTH,
            East => Connectors::EAST,
            South => Connectors::SOUTH,
            West => Connectors::WEST,
        }
    }

    /// `(row, col)` displacement of one step in this direction.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            North => (-1, 0),
            East => (0, 1),
            South => (1, 0),
            West => (0, -1),
        }
    }

    /// Direction of the single orthogonal step from `from` to `to`, if there is one.
    pub fn between(from: Coord2, to: Coord2) -> Option<Self> {
        Self::NEIGHBOR_ORDER
            .into_iter()
            .find(|dir| apply_delta(from, dir.delta(), (Coord::MAX, Coord::MAX)) == Some(to))
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Lazy walk over the in-bounds orthogonal neighbors of a tile, in
/// [`Direction::NEIGHBOR_ORDER`].
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = Direction::NEIGHBOR_ORDER.get(usize::from(self.index))?;
            let next_item = apply_delta(self.center, dir.delta(), self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
