use alloc::vec::Vec;
use core::ops::Range;

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::union_find::DisjointSets;
use super::*;

/// Range edge weights are drawn from.
pub const EDGE_WEIGHTS: Range<u8> = 0..100;

/// Candidate wire between two adjacent tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Coord2,
    pub to: Coord2,
    pub weight: u8,
}

/// Minimum spanning tree over the grid adjacency graph with random edge weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    size: Coord2,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Runs Kruskal's algorithm, drawing one weight per adjacent pair from `rng`.
    pub fn build<R: Rng>(size: Coord2, rng: &mut R) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        Self::from_candidates(size, weighted_edges(size, rng))
    }

    /// Kruskal's algorithm over an explicit candidate list; the candidates must
    /// connect every tile of `size`.
    fn from_candidates(size: Coord2, mut candidates: Vec<Edge>) -> Result<Self> {
        // stable, so equal weights keep enumeration order
        candidates.sort_by_key(|edge| edge.weight);

        let total_tiles = usize::from(mult(size.0, size.1));
        let mut sets = DisjointSets::new(total_tiles);
        let mut edges = Vec::with_capacity(total_tiles.saturating_sub(1));

        for edge in candidates {
            if sets.components() == 1 {
                break;
            }
            if sets.union(flat_index(edge.from, size), flat_index(edge.to, size)) {
                edges.push(edge);
            }
        }

        if sets.components() != 1 {
            let components = sets.components().try_into().unwrap_or(CellCount::MAX);
            log::error!(
                "Spanning tree for {}x{} board left {} components",
                size.0,
                size.1,
                components
            );
            return Err(GameError::DisconnectedBoard { components });
        }

        Ok(Self { size, edges })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// Accepted edges, in the order Kruskal's algorithm accepted them.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Opens the connectors of every tree edge on `grid`.
    pub fn burn_into(&self, grid: &mut Grid) -> Result<()> {
        if grid.size() != self.size {
            return Err(GameError::InvalidBoardShape);
        }
        for edge in &self.edges {
            grid.link(edge.from, edge.to);
        }
        Ok(())
    }
}

/// Every unordered adjacent pair once, in row-major then neighbor order.
fn weighted_edges<R: Rng>(size: Coord2, rng: &mut R) -> Vec<Edge> {
    let (rows, cols) = size;
    let mut edges = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let from = (row, col);
            for to in NeighborIter::new(from, size) {
                // the pair was already added when visiting `to`
                if flat_index(to, size) < flat_index(from, size) {
                    continue;
                }
                edges.push(Edge {
                    from,
                    to,
                    weight: rng.random_range(EDGE_WEIGHTS),
                });
            }
        }
    }

    edges
}

/// Random board: spanning-tree wiring, then every tile turned a random number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTreeGenerator {
    seed: u64,
    scramble: bool,
}

impl SpanningTreeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            scramble: true,
        }
    }

    /// Leaves every tile facing the way the tree was burned in.
    pub fn without_scramble(self) -> Self {
        Self {
            scramble: false,
            ..self
        }
    }
}

impl BoardGenerator for SpanningTreeGenerator {
    fn generate(self, size: Coord2) -> Result<BoardLayout> {
        let started = Instant::now();

        let mut grid = Grid::new(size)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let tree = SpanningTree::build(size, &mut rng)?;
        tree.burn_into(&mut grid)?;

        if self.scramble {
            for tile in grid.iter_mut() {
                for _ in 0..rng.random_range(0..4) {
                    tile.rotate_clockwise();
                }
            }
        }

        log::debug!(
            "Generated {}x{} spanning tree board with {} edges from seed {} in {:?}",
            size.0,
            size.1,
            tree.edges().len(),
            self.seed,
            started.elapsed()
        );

        BoardLayout::new(grid, (0, 0))
    }
}
