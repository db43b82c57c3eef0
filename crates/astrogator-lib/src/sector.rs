use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::hex::HexCoord;

/// Travel advisory zone for a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelZone {
    #[default]
    Green,
    Amber,
    Red,
}

impl fmt::Display for TravelZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelZone::Green => f.write_str("green"),
            TravelZone::Amber => f.write_str("amber"),
            TravelZone::Red => f.write_str("red"),
        }
    }
}

/// Starport quality class, `A` (best) through `E`, or `X` for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    #[default]
    X,
}

impl Starport {
    /// Whether ships can buy fuel here. Classes `A` through `D` sell fuel;
    /// `E` is a bare landing spot and `X` means no port at all.
    pub fn provides_fuel(&self) -> bool {
        !matches!(self, Starport::E | Starport::X)
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Starport::A => f.write_str("A"),
            Starport::B => f.write_str("B"),
            Starport::C => f.write_str("C"),
            Starport::D => f.write_str("D"),
            Starport::E => f.write_str("E"),
            Starport::X => f.write_str("X"),
        }
    }
}

impl TryFrom<char> for Starport {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Starport::A),
            'B' => Ok(Starport::B),
            'C' => Ok(Starport::C),
            'D' => Ok(Starport::D),
            'E' => Ok(Starport::E),
            'X' => Ok(Starport::X),
            _ => Err(Error::InvalidStarport { value }),
        }
    }
}

/// A star system entry on a sector map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub hex: HexCoord,
    pub name: String,
    #[serde(default)]
    pub zone: TravelZone,
    #[serde(default)]
    pub gas_giants: u32,
    #[serde(default)]
    pub starport: Starport,
}

impl System {
    /// A green-zone system with no gas giants and no starport.
    pub fn new(hex: HexCoord, name: impl Into<String>) -> Self {
        Self {
            hex,
            name: name.into(),
            zone: TravelZone::default(),
            gas_giants: 0,
            starport: Starport::default(),
        }
    }

    pub fn with_zone(mut self, zone: TravelZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_gas_giants(mut self, gas_giants: u32) -> Self {
        self.gas_giants = gas_giants;
        self
    }

    pub fn with_starport(mut self, starport: Starport) -> Self {
        self.starport = starport;
        self
    }

    /// Whether the system has at least one gas giant to skim fuel from.
    pub fn has_gas_giant(&self) -> bool {
        self.gas_giants > 0
    }
}

/// Source of sector maps, keyed by sector name.
///
/// Route planning borrows the system list for the duration of a search, so
/// implementations hand out slices rather than copies.
pub trait SectorSource {
    /// Systems charted in the named sector, or `None` for an unknown sector.
    fn list_systems(&self, sector: &str) -> Option<&[System]>;
}

/// Sector maps held in memory, typically loaded from a data file at startup.
#[derive(Debug, Default)]
pub struct InMemorySectorSource {
    sectors: HashMap<String, Vec<System>>,
}

impl InMemorySectorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sector map.
    pub fn insert_sector(&mut self, name: impl Into<String>, systems: Vec<System>) {
        self.sectors.insert(name.into(), systems);
    }
}

impl SectorSource for InMemorySectorSource {
    fn list_systems(&self, sector: &str) -> Option<&[System]> {
        self.sectors.get(sector).map(Vec::as_slice)
    }
}
