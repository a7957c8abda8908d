use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Direction, Distance};

bitflags! {
    /// Open pipe connectors of a tile.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Connectors: u8 {
        const NORTH = 0b0001;
        const EAST = 0b0010;
        const SOUTH = 0b0100;
        const WEST = 0b1000;
    }
}

impl Connectors {
    /// Quarter turn clockwise: north becomes east, east south, south west, west north.
    pub const fn rotated_clockwise(self) -> Self {
        let bits = self.bits();
        Self::from_bits_truncate((bits << 1) | (bits >> 3))
    }

    /// Box-drawing character for the pipe shape.
    pub const fn glyph(self) -> char {
        match self.bits() {
            0b0000 => '·',
            0b0001 => '╵',
            0b0010 => '╶',
            0b0011 => '└',
            0b0100 => '╷',
            0b0101 => '│',
            0b0110 => '┌',
            0b0111 => '├',
            0b1000 => '╴',
            0b1001 => '┘',
            0b1010 => '─',
            0b1011 => '┴',
            0b1100 => '┐',
            0b1101 => '┤',
            0b1110 => '┬',
            _ => '┼',
        }
    }

    /// Inverse of [`Connectors::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        (0..16)
            .map(Self::from_bits_truncate)
            .find(|connectors| connectors.glyph() == glyph)
    }
}

/// Single game piece: its connectors plus the power state derived by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    connectors: Connectors,
    quarter_turns: u8,
    power_station: bool,
    lit: bool,
    distance: Option<Distance>,
}

impl Tile {
    pub const fn new(connectors: Connectors) -> Self {
        Self {
            connectors,
            quarter_turns: 0,
            power_station: false,
            lit: false,
            distance: None,
        }
    }

    pub const fn connectors(&self) -> Connectors {
        self.connectors
    }

    pub const fn faces_toward(&self, dir: Direction) -> bool {
        self.connectors.contains(dir.connector())
    }

    /// Open connectors in neighbor order.
    pub fn open_directions(&self) -> SmallVec<[Direction; 4]> {
        Direction::NEIGHBOR_ORDER
            .into_iter()
            .filter(|&dir| self.faces_toward(dir))
            .collect()
    }

    pub fn rotate_clockwise(&mut self) {
        self.connectors = self.connectors.rotated_clockwise();
        self.quarter_turns = (self.quarter_turns + 1) % 4;
    }

    /// Quarter turns applied since the tile was generated, `0..=3`.
    pub const fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    pub const fn is_power_station(&self) -> bool {
        self.power_station
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Hops to the power station, `None` when the station cannot be reached.
    pub const fn distance_to_station(&self) -> Option<Distance> {
        self.distance
    }

    pub(crate) fn open(&mut self, dir: Direction) {
        self.connectors.insert(dir.connector());
    }

    pub(crate) fn set_power_station(&mut self, power_station: bool) {
        self.power_station = power_station;
    }

    pub(crate) fn set_power(&mut self, distance: Option<Distance>, radius: Distance) {
        self.distance = distance;
        self.lit = distance.is_some_and(|distance| distance <= radius);
    }
}
