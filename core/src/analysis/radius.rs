use crate::*;

impl Grid {
    /// Effective power radius around `station`, from a double-sweep diameter
    /// estimate of the station's connected wiring.
    ///
    /// The estimate is exact while the wiring is a tree, which rotation alone
    /// cannot change on a generated board.
    pub fn estimate_radius(&self, station: Coord2) -> Result<Distance> {
        let from_station = self.breadth_first_distances(station)?;
        self.radius_from(&from_station)
    }

    /// Same as [`Grid::estimate_radius`], reusing a sweep already run from the station.
    pub fn radius_from(&self, from_station: &DistanceMap) -> Result<Distance> {
        let from_farthest = self.breadth_first_distances(from_station.farthest())?;
        Ok(from_farthest.max_distance() / 2 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(glyphs: &str) -> Grid {
        glyphs.parse().unwrap()
    }

    #[test]
    fn single_tile_has_radius_one() {
        assert_eq!(grid("·").estimate_radius((0, 0)), Ok(1));
        assert_eq!(grid("┼").estimate_radius((0, 0)), Ok(1));
    }

    #[test]
    fn radius_is_half_the_diameter_plus_one() {
        // straight line of five tiles, diameter 4
        let board = grid("╶───╴");

        assert_eq!(board.estimate_radius((0, 0)), Ok(3));
        assert_eq!(board.estimate_radius((0, 2)), Ok(3));
        assert_eq!(board.estimate_radius((0, 4)), Ok(3));
    }

    #[test]
    fn radius_finds_diameter_away_from_station() {
        // the station hangs off the middle of a six-tile spine, diameter 5
        let board = grid(
            "
            ╶─┬──╴
            ··╵···
            ",
        );

        assert_eq!(board.estimate_radius((1, 2)), Ok(3));
    }

    #[test]
    fn radius_only_measures_the_station_component() {
        let board = grid("╶╴╶──╴");

        assert_eq!(board.estimate_radius((0, 0)), Ok(1));
        assert_eq!(board.estimate_radius((0, 5)), Ok(2));
    }

    #[test]
    fn radius_rejects_off_board_station() {
        assert_eq!(grid("─").estimate_radius((0, 1)), Err(GameError::OutOfBounds));
    }
}
