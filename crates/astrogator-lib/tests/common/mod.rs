//! Common test fixtures for the routing integration tests.
//!
//! Two small sector maps cover most scenarios: a straight corridor of
//! systems two parsecs apart, and a busier main with amber and red zones,
//! a dry backwater, and an isolated system no drive can reach.

use astrogator_lib::{HexCoord, InMemorySectorSource, Starport, System, TravelZone};

/// Parse a hex literal that is known to be valid.
#[allow(dead_code)]
pub fn hx(value: &str) -> HexCoord {
    value.parse().expect("valid hex literal")
}

/// A north-south line of four systems, each two parsecs from the next.
///
/// The origin has no fuel at all; the two middle stops sell fuel from
/// their ports but have no gas giants to skim.
#[allow(dead_code)]
pub fn corridor_source() -> InMemorySectorSource {
    let mut source = InMemorySectorSource::new();
    source.insert_sector(
        "Corridor",
        vec![
            System::new(hx("0101"), "Atsa"),
            System::new(hx("0103"), "Bishop").with_starport(Starport::C),
            System::new(hx("0105"), "Corsabren").with_starport(Starport::D),
            System::new(hx("0107"), "Depot").with_starport(Starport::A),
        ],
    );
    source
}

/// A stretch of the Spinward Marches main along row 5.
///
/// Cogri sits under a red travel advisory, Marduk under an amber one.
/// Tanith has only an E-class landing spot and no gas giant, so careful
/// ships cannot top off there. Sacnoth is more than six parsecs from
/// everything.
#[allow(dead_code)]
pub fn marches_source() -> InMemorySectorSource {
    let mut source = InMemorySectorSource::new();
    source.insert_sector(
        "Spinward Marches",
        vec![
            System::new(hx("0105"), "Ferry")
                .with_starport(Starport::C)
                .with_gas_giants(1),
            System::new(hx("0205"), "Marduk")
                .with_starport(Starport::B)
                .with_zone(TravelZone::Amber),
            System::new(hx("0305"), "Tanith").with_starport(Starport::E),
            System::new(hx("0405"), "Cogri")
                .with_starport(Starport::A)
                .with_gas_giants(1)
                .with_zone(TravelZone::Red),
            System::new(hx("0505"), "Skald")
                .with_starport(Starport::D)
                .with_gas_giants(1),
            System::new(hx("0705"), "Rhylanor")
                .with_starport(Starport::A)
                .with_gas_giants(2),
            System::new(hx("0805"), "Margesi").with_starport(Starport::B),
            System::new(hx("0115"), "Sacnoth").with_starport(Starport::X),
        ],
    );
    source
}
