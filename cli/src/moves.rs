use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use litgrid_core::{Coord2, Direction, PlayEngine, PlayOutcome};

/// One player action given on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// `rotate:ROW,COL`
    Rotate(Coord2),
    /// `north`, `east`, `south` or `west`
    Station(Direction),
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(coords) = s.strip_prefix("rotate:") {
            let (row, col) = coords
                .split_once(',')
                .ok_or_else(|| anyhow!("expected rotate:ROW,COL, got {s:?}"))?;
            let row = row.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
            let col = col.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
            return Ok(Self::Rotate((row, col)));
        }

        let dir = match s.to_ascii_lowercase().as_str() {
            "north" | "n" | "up" => Direction::North,
            "east" | "e" | "right" => Direction::East,
            "south" | "s" | "down" => Direction::South,
            "west" | "w" | "left" => Direction::West,
            _ => bail!("unknown move {s:?}"),
        };
        Ok(Self::Station(dir))
    }
}

impl Move {
    pub fn apply(self, engine: &mut PlayEngine) -> Result<PlayOutcome> {
        let outcome = match self {
            Self::Rotate(coords) => engine
                .rotate_tile_at(coords)
                .with_context(|| format!("rotating tile {coords:?}"))?,
            Self::Station(dir) => engine
                .move_station(dir)
                .with_context(|| format!("moving station {dir:?}"))?,
        };
        if !outcome.has_update() {
            log::info!("{:?} rejected, station stays at {:?}", self, engine.station());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rotations_and_directions() {
        assert_eq!("rotate:2,3".parse::<Move>().unwrap(), Move::Rotate((2, 3)));
        assert_eq!("rotate: 0, 1".parse::<Move>().unwrap(), Move::Rotate((0, 1)));
        assert_eq!("East".parse::<Move>().unwrap(), Move::Station(Direction::East));
        assert_eq!("up".parse::<Move>().unwrap(), Move::Station(Direction::North));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!("rotate:2".parse::<Move>().is_err());
        assert!("rotate:a,1".parse::<Move>().is_err());
        assert!("rotate:-1,0".parse::<Move>().is_err());
        assert!("diagonal".parse::<Move>().is_err());
    }

    #[test]
    fn applies_moves_to_engine() {
        let mut engine = PlayEngine::new_manual_board((3, 3)).unwrap();

        assert_eq!(Move::Station(Direction::North).apply(&mut engine).unwrap(), PlayOutcome::NoChange);
        assert_eq!(Move::Rotate((0, 1)).apply(&mut engine).unwrap(), PlayOutcome::Changed);
        assert!(Move::Rotate((9, 9)).apply(&mut engine).is_err());
    }
}
