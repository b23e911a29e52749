//! Display options.
//!
//! Rendering never consults global state. Callers that want a non-default temperature scale pass a
//! [`FormatOptions`] explicitly, typically built once at start-up from a TOML file or the environment:
//!
//! ```rust
//! use siqty_core::{FormatOptions, TemperatureUnit};
//! use siqty_core::temperature::Temperature;
//!
//! let options = FormatOptions::from_toml_str("temperature_unit = \"fahrenheit\"").unwrap();
//! assert_eq!(options.temperature_unit, TemperatureUnit::Fahrenheit);
//! assert_eq!(Temperature::from_celsius(25.0).display_with(&options).to_string(), "77°F");
//! ```

use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use std::path::Path;

/// Scale used to render absolute temperatures and temperature differences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius (`°C`).
    #[default]
    Celsius,
    /// Kelvin (`K`).
    Kelvin,
    /// Degrees Fahrenheit (`°F`).
    Fahrenheit,
}

impl TemperatureUnit {
    /// Suffix appended to rendered values: `°C`, `K` or `°F`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Kelvin => "K",
            Self::Fahrenheit => "°F",
        }
    }

    /// Lowercase full name, as written in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Kelvin => "kelvin",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    /// Accepts `C`/`K`/`F`, the full names, and the degree-sign symbols, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" | "degc" => Ok(Self::Celsius),
            "k" | "kelvin" | "°k" => Ok(Self::Kelvin),
            "f" | "fahrenheit" | "°f" | "degf" => Ok(Self::Fahrenheit),
            _ => Err(Error::UnknownTemperatureUnit(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for TemperatureUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TemperatureUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Options that influence how values are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FormatOptions {
    /// Scale for [`Temperature`](crate::temperature::Temperature) and
    /// [`TemperatureDelta`](crate::temperature::TemperatureDelta) output.
    pub temperature_unit: TemperatureUnit,
}

impl FormatOptions {
    /// Environment variable read by [`FormatOptions::from_env`].
    pub const TEMPERATURE_UNIT_ENV: &'static str = "SIQTY_TEMPERATURE_UNIT";

    /// Returns these options with a different temperature scale.
    pub const fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    /// Parses options from a TOML document. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads options from a TOML file.
    ///
    /// # Returns
    /// * `Ok(FormatOptions)` if the file was read and parsed
    /// * `Err(Error::ConfigRead)` if the file cannot be read
    /// * `Err(Error::ConfigParse)` if its content is invalid
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Default options, with the temperature scale overridden by `SIQTY_TEMPERATURE_UNIT` when it is set.
    ///
    /// An unrecognised value is logged with `log::warn!` and ignored.
    pub fn from_env() -> Self {
        let value = std::env::var(Self::TEMPERATURE_UNIT_ENV).ok();
        Self::default().with_env_override(value.as_deref())
    }

    fn with_env_override(self, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match value.parse() {
            Ok(unit) => self.with_temperature_unit(unit),
            Err(e) => {
                log::warn!(
                    "Ignoring {}: {}; keeping {}",
                    Self::TEMPERATURE_UNIT_ENV,
                    e,
                    self.temperature_unit
                );
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_temperature_unit_spellings() {
        for s in ["C", "c", "Celsius", "CELSIUS", "°C", " celsius "] {
            assert_eq!(s.parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius, "{s}");
        }
        for s in ["K", "kelvin", "Kelvin"] {
            assert_eq!(s.parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin, "{s}");
        }
        for s in ["F", "f", "Fahrenheit", "°F"] {
            assert_eq!(s.parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit, "{s}");
        }
    }

    #[test]
    fn parse_unknown_temperature_unit() {
        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert!(matches!(err, Error::UnknownTemperatureUnit(ref s) if s == "rankine"));
        assert_eq!(err.to_string(), "Unknown temperature unit: \"rankine\"");
    }

    #[test]
    fn defaults_to_celsius() {
        assert_eq!(FormatOptions::default().temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn env_override() {
        let base = FormatOptions::default();
        assert_eq!(base.with_env_override(None), base);
        assert_eq!(
            base.with_env_override(Some("kelvin")).temperature_unit,
            TemperatureUnit::Kelvin
        );
        assert_eq!(base.with_env_override(Some("bogus")), base);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use std::io::Write;

        #[test]
        fn toml_roundtrip() {
            let options = FormatOptions::default().with_temperature_unit(TemperatureUnit::Kelvin);
            let text = toml::to_string(&options).unwrap();
            assert_eq!(text.trim(), "temperature_unit = \"kelvin\"");
            assert_eq!(FormatOptions::from_toml_str(&text).unwrap(), options);
        }

        #[test]
        fn toml_accepts_short_spellings_and_missing_keys() {
            assert_eq!(
                FormatOptions::from_toml_str("temperature_unit = \"F\"").unwrap().temperature_unit,
                TemperatureUnit::Fahrenheit
            );
            assert_eq!(FormatOptions::from_toml_str("").unwrap(), FormatOptions::default());
        }

        #[test]
        fn toml_rejects_unknown_unit() {
            let err = FormatOptions::from_toml_str("temperature_unit = \"rankine\"").unwrap_err();
            assert!(matches!(err, Error::ConfigParse(_)));
        }

        #[test]
        fn from_file_reads_toml() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "temperature_unit = \"fahrenheit\"").unwrap();
            let options = FormatOptions::from_file(file.path()).unwrap();
            assert_eq!(options.temperature_unit, TemperatureUnit::Fahrenheit);
        }

        #[test]
        fn from_file_reports_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("absent.toml");
            let err = FormatOptions::from_file(&missing).unwrap_err();
            match err {
                Error::ConfigRead { path, .. } => assert_eq!(path, missing),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn json_uses_names() {
            let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
            assert_eq!(json, "\"fahrenheit\"");
            let parsed: TemperatureUnit = serde_json::from_str("\"°C\"").unwrap();
            assert_eq!(parsed, TemperatureUnit::Celsius);
        }
    }
}
