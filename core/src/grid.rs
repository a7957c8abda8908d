use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of tiles addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    tiles: Array2<Tile>,
}

#[derive(Deserialize)]
struct GridRepr {
    tiles: Array2<Tile>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GameError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        Self::from_tiles(repr.tiles)
    }
}

impl Grid {
    /// A board with every connector closed.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self {
            tiles: Array2::default(size.to_nd_index()),
        })
    }

    pub fn from_connector_mask(mask: Array2<Connectors>) -> Result<Self> {
        Self::from_tiles(mask.mapv(Tile::new))
    }

    fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        // dimensions are checked against Coord::MAX on construction
        (rows as Coord, cols as Coord)
    }

    pub fn total_tiles(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.tiles[coords.to_nd_index()])
    }

    pub fn tile_at_mut(&mut self, coords: Coord2) -> Result<&mut Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.tiles[coords.to_nd_index()])
    }

    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Neighbor one step from `coords` in `dir`, if it lies on the board.
    pub fn step(&self, coords: Coord2, dir: Direction) -> Option<Coord2> {
        apply_delta(coords, dir.delta(), self.size())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Opens the facing connectors on both tiles of an adjacent pair.
    pub(crate) fn link(&mut self, a: Coord2, b: Coord2) {
        if let Some(dir) = Direction::between(a, b) {
            self[a].open(dir);
            self[b].open(dir.opposite());
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{}", tile.connectors().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses one line of pipe glyphs per board row, as printed by `Display`.
impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|glyph| Connectors::from_glyph(glyph).ok_or(GameError::InvalidBoardShape))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }

        let mask = Array2::from_shape_vec((rows.len(), cols), rows.into_iter().flatten().collect())
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_connector_mask(mask)
    }
}
