use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Board plus power state, re-evaluated after every move.
///
/// Snapshots are restored through [`PlayEngine::new`], so the stored power
/// state is recomputed rather than trusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout")]
pub struct PlayEngine {
    grid: Grid,
    station: Coord2,
    radius: Distance,
    lit_count: CellCount,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(layout: BoardLayout) -> Result<Self> {
        let (grid, station) = layout.into_parts();
        let mut engine = Self {
            grid,
            station,
            radius: 1,
            lit_count: 0,
            state: Default::default(),
        };
        engine.evaluate()?;
        Ok(engine)
    }

    pub fn new_random_board(size: Coord2, seed: u64) -> Result<Self> {
        Self::new(SpanningTreeGenerator::new(seed).generate(size)?)
    }

    pub fn new_fractal_board(size: Coord2) -> Result<Self> {
        Self::new(FractalGenerator.generate(size)?)
    }

    pub fn new_manual_board(size: Coord2) -> Result<Self> {
        Self::new(ManualGenerator.generate(size)?)
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Self::new(config.generate()?)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<&Tile> {
        self.grid.tile_at(coords)
    }

    pub fn station(&self) -> Coord2 {
        self.station
    }

    /// Power radius from the last evaluation.
    pub fn radius(&self) -> Distance {
        self.radius
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    /// Whether every tile, the station included, is lit.
    pub fn is_won(&self) -> bool {
        self.grid.iter().all(Tile::is_lit)
    }

    /// Recomputes the radius and every tile's distance and lit flag from scratch.
    pub fn evaluate(&mut self) -> Result<EngineState> {
        let distances = self.grid.breadth_first_distances(self.station)?;
        self.radius = self.grid.radius_from(&distances)?;

        let mut lit_count: CellCount = 0;
        for coords in self.grid.coords() {
            let tile = &mut self.grid[coords];
            tile.set_power(distances.get(coords), self.radius);
            if tile.is_lit() {
                lit_count += 1;
            }
        }
        self.lit_count = lit_count;

        self.state = if self.is_won() {
            EngineState::Won
        } else {
            EngineState::Active
        };

        log::trace!(
            "Station at {:?} lights {} of {} tiles within radius {}",
            self.station,
            self.lit_count,
            self.grid.total_tiles(),
            self.radius
        );
        Ok(self.state)
    }

    pub fn rotate_tile_at(&mut self, coords: Coord2) -> Result<PlayOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        self.grid[coords].rotate_clockwise();
        self.evaluate_outcome()
    }

    /// Moves the station one tile along an open, mutually facing pipe.
    ///
    /// A move the wiring does not allow leaves the station in place and
    /// reports [`PlayOutcome::NoChange`].
    pub fn move_station(&mut self, dir: Direction) -> Result<PlayOutcome> {
        self.check_not_finished()?;

        let Some(next) = self.grid.linked(self.station, dir) else {
            log::debug!("Station at {:?} cannot move {:?}", self.station, dir);
            return Ok(PlayOutcome::NoChange);
        };

        self.grid[self.station].set_power_station(false);
        self.grid[next].set_power_station(true);
        self.station = next;
        self.evaluate_outcome()
    }

    fn evaluate_outcome(&mut self) -> Result<PlayOutcome> {
        Ok(match self.evaluate()? {
            EngineState::Won => PlayOutcome::Won,
            EngineState::Active => PlayOutcome::Changed,
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl TryFrom<BoardLayout> for PlayEngine {
    type Error = GameError;

    fn try_from(layout: BoardLayout) -> Result<Self> {
        Self::new(layout)
    }
}
