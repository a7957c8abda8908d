use super::*;

/// Deterministic board built by recursive quadrant subdivision: each region gets
/// a U-shaped wire along its left, bottom and right edges, then its quadrants are
/// wired the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FractalGenerator;

impl BoardGenerator for FractalGenerator {
    fn generate(self, size: Coord2) -> Result<BoardLayout> {
        let mut grid = Grid::new(size)?;
        subdivide(&mut grid, size, (0, 0));
        log::debug!("Generated {}x{} fractal board", size.0, size.1);
        BoardLayout::new(grid, (0, size.1 / 2))
    }
}

fn subdivide(grid: &mut Grid, (rows, cols): Coord2, (top, left): Coord2) {
    if rows > 1 && cols > 1 {
        let bottom = top + rows - 1;
        let right = left + cols - 1;
        for row in top..bottom {
            grid.link((row, left), (row + 1, left));
            grid.link((row, right), (row + 1, right));
        }
        for col in left..right {
            grid.link((bottom, col), (bottom, col + 1));
        }
    }

    if rows == 1 || cols <= 2 {
        return;
    }

    if rows == 2 {
        for col in left + 1..left + cols - 1 {
            grid.link((top, col), (top + 1, col));
        }
        return;
    }

    let upper_rows = rows.div_ceil(2);
    let left_cols = cols.div_ceil(2);
    let lower_rows = rows / 2;
    let right_cols = cols / 2;

    subdivide(grid, (upper_rows, left_cols), (top, left));
    subdivide(grid, (upper_rows, right_cols), (top, left + left_cols));
    subdivide(grid, (lower_rows, left_cols), (top + upper_rows, left));
    subdivide(grid, (lower_rows, right_cols), (top + upper_rows, left + left_cols));
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn two_by_two_is_a_single_u() {
        let layout = FractalGenerator.generate((2, 2)).unwrap();

        assert_eq!(layout.grid().to_string(), "╷╷\n└┘\n");
        assert_eq!(layout.station(), (0, 1));
    }

    #[test]
    fn two_rows_hang_inner_columns_off_the_bottom() {
        let layout = FractalGenerator.generate((2, 4)).unwrap();

        assert_eq!(layout.grid().to_string(), "╷╷╷╷\n└┴┴┘\n");
    }

    #[test]
    fn four_by_four_is_a_spanning_tree() {
        let layout = FractalGenerator.generate((4, 4)).unwrap();
        let grid = layout.grid();

        assert_eq!(grid.to_string(), "╷╷╷╷\n├┘└┤\n│╷╷│\n└┴┴┘\n");
        let distances = grid.breadth_first_distances(layout.station()).unwrap();
        assert_eq!(distances.reached_count(), 16);
    }

    #[test]
    fn single_row_or_column_stays_unwired() {
        for size in [(1, 1), (1, 5), (4, 1)] {
            let layout = FractalGenerator.generate(size).unwrap();

            assert!(layout.grid().iter().all(|tile| tile.connectors().is_empty()));
        }
    }

    #[test]
    fn station_sits_in_middle_of_top_row() {
        let layout = FractalGenerator.generate((5, 7)).unwrap();

        assert_eq!(layout.station(), (0, 3));
        assert!(layout.grid()[(0, 3)].is_power_station());
    }
}
