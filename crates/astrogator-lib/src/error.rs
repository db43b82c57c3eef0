use thiserror::Error;

/// Convenient result alias for the astrogator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a named sector is not present in the data source.
    #[error("unknown sector: {name}")]
    UnknownSector { name: String },

    /// Raised when a hex does not hold a system in the resolved sector.
    #[error("no system at hex {hex} in sector {sector}")]
    UnknownSystem { sector: String, hex: String },

    /// Raised when no route satisfies the jump range and avoidance rules.
    #[error("no valid route found between {start} and {goal}")]
    NoRoute { start: String, goal: String },

    /// Raised when a hex location is not exactly four ASCII digits.
    #[error("invalid hex location {value:?}; expected four digits such as 0101")]
    InvalidHex { value: String },

    /// Raised when a jump range falls outside the drive ratings of 1 to 6.
    #[error("invalid jump range {value}; drive ratings run from 1 to 6")]
    InvalidJumpRange { value: u32 },

    /// Raised when a starport code is not one of A-E or X.
    #[error("invalid starport class {value:?}")]
    InvalidStarport { value: char },
}
