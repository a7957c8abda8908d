#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod grid;
mod tile;
mod types;

/// Seed used when a configuration does not name one.
pub const DEFAULT_SEED: u64 = 1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Randomly weighted spanning tree, scrambled.
    #[default]
    Random,
    /// Recursive quadrant subdivision.
    Fractal,
    /// Open middle row with horizontal pipes elsewhere.
    Manual,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, strategy: Strategy, seed: Option<u64>) -> Self {
        Self {
            size,
            strategy,
            seed,
        }
    }

    pub fn new((rows, cols): Coord2, strategy: Strategy, seed: Option<u64>) -> Self {
        let size = (rows.max(1), cols.max(1));
        if size != (rows, cols) {
            log::warn!(
                "Board size {}x{} has no tiles, using {}x{}",
                rows,
                cols,
                size.0,
                size.1
            );
        }
        Self::new_unchecked(size, strategy, seed)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn generate(&self) -> Result<BoardLayout> {
        match self.strategy {
            Strategy::Random => SpanningTreeGenerator::new(self.seed()).generate(self.size),
            Strategy::Fractal => FractalGenerator.generate(self.size),
            Strategy::Manual => ManualGenerator.generate(self.size),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), Strategy::default(), None)
    }
}

/// A wired board with its power station placed, ready to be played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayoutRepr")]
pub struct BoardLayout {
    grid: Grid,
    station: Coord2,
}

#[derive(Deserialize)]
struct LayoutRepr {
    grid: Grid,
    station: Coord2,
}

impl TryFrom<LayoutRepr> for BoardLayout {
    type Error = GameError;

    fn try_from(repr: LayoutRepr) -> Result<Self> {
        Self::new(repr.grid, repr.station)
    }
}

impl BoardLayout {
    /// Places the station on `station`, clearing any station flag elsewhere.
    pub fn new(mut grid: Grid, station: Coord2) -> Result<Self> {
        let station = grid.validate_coords(station)?;
        for tile in grid.iter_mut() {
            tile.set_power_station(false);
        }
        grid[station].set_power_station(true);
        Ok(Self { grid, station })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn station(&self) -> Coord2 {
        self.station
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn into_parts(self) -> (Grid, Coord2) {
        (self.grid, self.station)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    NoChange,
    Changed,
    Won,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            Won => true,
        }
    }
}

impl BitOr for PlayOutcome {
    type Output = PlayOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use PlayOutcome::*;
        match (self, rhs) {
            (Won, _) => Won,
            (_, Won) => Won,
            (Changed, _) => Changed,
            (_, Changed) => Changed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_empty_dimensions() {
        let config = BoardConfig::new((0, 4), Strategy::Fractal, None);

        assert_eq!(config.size, (1, 4));
        assert_eq!(config.total_tiles(), 4);
        assert_eq!(config.seed(), DEFAULT_SEED);
    }

    #[test]
    fn config_dispatches_on_strategy() {
        let random = BoardConfig::new((3, 3), Strategy::Random, Some(8));
        let fractal = BoardConfig::new((3, 3), Strategy::Fractal, None);
        let manual = BoardConfig::new((3, 3), Strategy::Manual, None);

        assert_eq!(
            random.generate(),
            SpanningTreeGenerator::new(8).generate((3, 3))
        );
        assert_eq!(fractal.generate().unwrap().station(), (0, 1));
        assert_eq!(manual.generate().unwrap().station(), (1, 1));
    }

    #[test]
    fn config_reads_from_json_with_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"size":[4,5]}"#).unwrap();

        assert_eq!(config, BoardConfig::new_unchecked((4, 5), Strategy::Random, None));

        let config: BoardConfig =
            serde_json::from_str(r#"{"size":[2,2],"strategy":"manual","seed":3}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Manual);
        assert_eq!(config.seed(), 3);
    }

    #[test]
    fn layout_keeps_a_single_station() {
        let grid = Grid::new((2, 2)).unwrap();
        let layout = BoardLayout::new(grid, (1, 0)).unwrap();
        let (grid, _) = layout.clone().into_parts();

        let moved = BoardLayout::new(grid, (0, 1)).unwrap();

        assert_eq!(layout.station(), (1, 0));
        assert!(moved.grid()[(0, 1)].is_power_station());
        assert!(!moved.grid()[(1, 0)].is_power_station());
    }

    #[test]
    fn layout_rejects_off_board_station() {
        let grid = Grid::new((2, 2)).unwrap();

        assert_eq!(BoardLayout::new(grid, (2, 0)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn layout_deserializes_through_station_check() {
        let layout = ManualGenerator.generate((3, 3)).unwrap();
        let mut value = serde_json::to_value(&layout).unwrap();

        assert_eq!(serde_json::from_value::<BoardLayout>(value.clone()).unwrap(), layout);

        value["station"] = serde_json::json!([3, 1]);
        assert!(serde_json::from_value::<BoardLayout>(value).is_err());
    }

    #[test]
    fn outcomes_combine_to_strongest() {
        use PlayOutcome::*;

        assert_eq!(NoChange | Changed, Changed);
        assert_eq!(Changed | Won, Won);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
    }
}
