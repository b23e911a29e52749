//! Error types for the fallible parts of the crate: parsing unit names and loading format options.
//!
//! Arithmetic and formatting never fail; an unknown magnitude is carried as NaN instead.

#[cfg(feature = "serde")]
use std::path::PathBuf;

/// Result type for fallible operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A temperature unit name that is neither Celsius, Kelvin, nor Fahrenheit.
    #[error("Unknown temperature unit: {0:?}")]
    UnknownTemperatureUnit(String),

    /// A configuration file could not be read.
    #[cfg(feature = "serde")]
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is not valid TOML or does not match the expected shape.
    #[cfg(feature = "serde")]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
