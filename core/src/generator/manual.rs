use super::*;

/// Fixed layout: a fully open middle row crossing horizontal pipes everywhere else,
/// with the station in the center.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ManualGenerator;

impl BoardGenerator for ManualGenerator {
    fn generate(self, size: Coord2) -> Result<BoardLayout> {
        let mut grid = Grid::new(size)?;
        let middle_row = size.0 / 2;

        for coords in grid.coords() {
            let connectors = if coords.0 == middle_row {
                Connectors::all()
            } else {
                Connectors::EAST | Connectors::WEST
            };
            grid[coords] = Tile::new(connectors);
        }

        log::debug!("Generated {}x{} manual board", size.0, size.1);
        BoardLayout::new(grid, (middle_row, size.1 / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn middle_row_is_fully_open() {
        let layout = ManualGenerator.generate((3, 3)).unwrap();

        assert_eq!(layout.grid().to_string(), "───\n┼┼┼\n───\n");
        assert_eq!(layout.station(), (1, 1));
        assert!(layout.grid()[(1, 1)].is_power_station());
    }

    #[test]
    fn station_is_centered_on_even_boards() {
        let layout = ManualGenerator.generate((4, 6)).unwrap();

        assert_eq!(layout.station(), (2, 3));
        assert_eq!(layout.grid()[(2, 0)].connectors(), Connectors::all());
        assert_eq!(
            layout.grid()[(0, 0)].connectors(),
            Connectors::EAST | Connectors::WEST
        );
    }
}
