//! Sector map loading from JSON files.
//!
//! A sector file names one sector and lists its systems:
//!
//! ```json
//! {
//!   "name": "Spinward Marches",
//!   "systems": [
//!     { "hex": "0910", "name": "Regina", "zone": "green",
//!       "gas_giants": 2, "starport": "A" }
//!   ]
//! }
//! ```
//!
//! Zone, gas giant count, and starport class all default when omitted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use astrogator_lib::{InMemorySectorSource, System};

#[derive(Debug, Deserialize)]
struct SectorFile {
    name: String,
    systems: Vec<System>,
}

/// Load a sector file, returning the sector's name and a source holding it.
pub fn load_sector_file(path: &Path) -> Result<(String, InMemorySectorSource)> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read sector file {}", path.display()))?;
    let file: SectorFile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse sector file {}", path.display()))?;

    let mut source = InMemorySectorSource::new();
    source.insert_sector(file.name.clone(), file.systems);
    Ok((file.name, source))
}
