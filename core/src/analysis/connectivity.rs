use alloc::collections::VecDeque;

use ndarray::Array2;

use crate::*;

/// Hop counts from one source tile to every tile reachable from it.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMap {
    source: Coord2,
    distances: Array2<Option<Distance>>,
    farthest: Coord2,
    max_distance: Distance,
    reached: CellCount,
}

impl DistanceMap {
    pub fn source(&self) -> Coord2 {
        self.source
    }

    /// Distance to `coords`, `None` when unreached or off the board.
    pub fn get(&self, coords: Coord2) -> Option<Distance> {
        self.distances.get(coords.to_nd_index()).copied().flatten()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.get(coords).is_some()
    }

    /// First tile found at the greatest distance, in traversal order.
    pub fn farthest(&self) -> Coord2 {
        self.farthest
    }

    pub fn max_distance(&self) -> Distance {
        self.max_distance
    }

    /// Number of tiles reached, the source included.
    pub fn reached_count(&self) -> CellCount {
        self.reached
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Distance)> + '_ {
        self.distances
            .indexed_iter()
            .filter_map(|((row, col), distance)| {
                // indices are bounded by the grid size, which fits in Coord
                distance.map(|distance| ((row as Coord, col as Coord), distance))
            })
    }
}

impl Grid {
    /// Whether `a` and `b` are orthogonal neighbors whose facing connectors are
    /// both open.
    pub fn locally_connected(&self, a: Coord2, b: Coord2) -> Result<bool> {
        let a = self.validate_coords(a)?;
        let b = self.validate_coords(b)?;

        Ok(Direction::between(a, b).is_some_and(|dir| self.linked(a, dir).is_some()))
    }

    /// Breadth-first search along locally connected pairs starting at `source`.
    pub fn breadth_first_distances(&self, source: Coord2) -> Result<DistanceMap> {
        let source = self.validate_coords(source)?;

        let mut distances = Array2::from_elem(self.size().to_nd_index(), None);
        distances[source.to_nd_index()] = Some(0);

        let mut farthest = source;
        let mut max_distance = 0;
        let mut reached: CellCount = 1;
        let mut to_visit = VecDeque::from([(source, 0)]);

        while let Some((coords, distance)) = to_visit.pop_front() {
            let next_distance = distance + 1;

            for dir in self[coords].open_directions() {
                let Some(next) = self.linked(coords, dir) else {
                    continue;
                };

                let slot = &mut distances[next.to_nd_index()];
                if slot.is_some() {
                    continue;
                }

                // uniform edge weights: the first visit is final
                *slot = Some(next_distance);
                reached += 1;
                if next_distance > max_distance {
                    farthest = next;
                    max_distance = next_distance;
                }
                to_visit.push_back((next, next_distance));
            }
        }

        Ok(DistanceMap {
            source,
            distances,
            farthest,
            max_distance,
            reached,
        })
    }

    /// Whether a chain of locally connected tiles leads from `source` to `target`.
    pub fn reachable(&self, source: Coord2, target: Coord2) -> Result<bool> {
        let target = self.validate_coords(target)?;
        if source == target {
            return Ok(true);
        }
        Ok(self.breadth_first_distances(source)?.contains(target))
    }

    /// Neighbor in `dir` when both facing connectors are open.
    pub(crate) fn linked(&self, coords: Coord2, dir: Direction) -> Option<Coord2> {
        if !self[coords].faces_toward(dir) {
            return None;
        }
        let next = self.step(coords, dir)?;
        self[next].faces_toward(dir.opposite()).then_some(next)
    }
}
