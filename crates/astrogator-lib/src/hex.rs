use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Location of a system on the sector grid in printed "CCRR" notation.
///
/// The first two digits are the column, the second two the row, so `"0304"`
/// is column 3, row 4. The type stores the pair and measures distances; it
/// does not range-check coordinates against any particular sector footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    column: u8,
    row: u8,
}

impl HexCoord {
    /// Create a coordinate from raw column and row numbers.
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Column component of the printed hex number.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Row component of the printed hex number.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Distance to another hex in parsecs.
    ///
    /// Offset coordinates are converted to cube coordinates so the standard
    /// hex-grid metric applies: the largest absolute per-axis delta. The
    /// metric is symmetric and satisfies the triangle inequality.
    pub fn distance_to(&self, other: &Self) -> u32 {
        CubeCoord::from(*self).distance_to(CubeCoord::from(*other))
    }
}

impl FromStr for HexCoord {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidHex {
                value: value.to_string(),
            });
        }

        let column = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let row = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');
        Ok(Self { column, row })
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.column, self.row)
    }
}

impl Serialize for HexCoord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexCoord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Cube-coordinate form of a hex location, used only for the metric.
///
/// The axes always satisfy `x + y + z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CubeCoord {
    x: i32,
    y: i32,
    z: i32,
}

impl From<HexCoord> for CubeCoord {
    fn from(hex: HexCoord) -> Self {
        let column = i32::from(hex.column);
        let row = i32::from(hex.row);
        let x = column - row / 2;
        let z = row;
        Self { x, y: -x - z, z }
    }
}

impl CubeCoord {
    fn distance_to(self, other: Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx.max(dy).max(dz)
    }
}
