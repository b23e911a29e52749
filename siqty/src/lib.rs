//! Strongly typed `f32` physical quantities with readable formatting.
//!
//! `siqty` is the user-facing crate in this workspace. It re-exports the full API from `siqty-core` and brings the
//! quantity types and unit markers of the common dimensions to the crate root.
//!
//! A value is always a `Quantity<D>`, where `D` is a zero-sized dimension marker. The magnitude is a single `f32` in
//! the dimension's base unit, so a quantity costs exactly as much as the float it wraps.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add volts to amperes).
//! - Makes unit conversion explicit: `from_milliamperes`, `in_kilohertz`, …
//! - Turns physical relations into operators: `Resistance * Current` is a `Voltage`.
//! - Renders values the way a person would write them: `"1.2433 kV"`, `"1.5 km²"`, `"32 mA"`.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra. Only the listed cross-dimension operators exist.
//! - Double precision: quantities are backed by `f32`.
//! - Locale-aware formatting.
//!
//! # Quick start
//!
//! ```rust
//! use siqty::{Current, Resistance, Voltage};
//!
//! let v: Voltage = Resistance::from_ohms(220.0) * Current::from_milliamperes(15.0);
//! assert!((v.in_volts() - 3.3).abs() < 1e-5);
//! assert_eq!(v.to_string(), "3.3 V");
//! ```
//!
//! Ladder-formatted dimensions pick the largest fitting unit from a fixed table:
//!
//! ```rust
//! use siqty::{Area, Length};
//!
//! assert_eq!(Area::from_square_meters(1.5).to_string(), "1.5 m²");
//! assert_eq!(Length::from_meters(1500.0).to_string(), "1.5 km");
//! ```
//!
//! Temperatures take explicit display options instead of a global setting:
//!
//! ```rust
//! use siqty::{FormatOptions, Temperature, TemperatureUnit};
//!
//! let options = FormatOptions::default().with_temperature_unit(TemperatureUnit::Kelvin);
//! assert_eq!(Temperature::from_celsius(0.0).display_with(&options).to_string(), "273.15K");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use siqty::{Current, Voltage};
//!
//! let _ = Voltage::from_volts(1.0) + Current::from_amperes(1.0);
//! ```
//!
//! # Modules
//!
//! Every dimension has its own module (also re-exported here). The per-length, per-area and per-volume count
//! modules share unit names (`UnitPerMeter`, …) and are only reachable through their module:
//!
//! - `siqty::lineic_number`, `siqty::linear_density`, `siqty::linear_number_density`
//! - `siqty::areic_number`, `siqty::surface_number_density`
//! - `siqty::volumic_number`
//!
//! # Feature flags
//!
//! - `serde` (default): serde support for quantities and TOML loading of [`FormatOptions`].
//!
//! # Panics and errors
//!
//! Arithmetic and formatting never panic and never fail. A value that could not be determined is NaN (`UNKNOWN`);
//! it propagates through arithmetic and renders as `"? <unit>"`. Only option loading and unit-name parsing return
//! [`Result`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use siqty_core::*;

/// Derive macro used by `siqty-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it is intended for use inside `siqty-core`
/// (or crates exposing the same crate-root API). Most users should not need this.
pub use siqty_derive::Unit;

pub use siqty_core::units::area;
pub use siqty_core::units::areic_number;
pub use siqty_core::units::capacitance;
pub use siqty_core::units::charge;
pub use siqty_core::units::current;
pub use siqty_core::units::force;
pub use siqty_core::units::frequency;
pub use siqty_core::units::length;
pub use siqty_core::units::linear_density;
pub use siqty_core::units::linear_number_density;
pub use siqty_core::units::lineic_number;
pub use siqty_core::units::mass;
pub use siqty_core::units::power;
pub use siqty_core::units::pressure;
pub use siqty_core::units::resistance;
pub use siqty_core::units::surface_number_density;
pub use siqty_core::units::temperature;
pub use siqty_core::units::time;
pub use siqty_core::units::velocity;
pub use siqty_core::units::voltage;
pub use siqty_core::units::volume;
pub use siqty_core::units::volume_flow_rate;
pub use siqty_core::units::volumic_number;
pub use siqty_core::units::work;

pub use siqty_core::units::area::*;
pub use siqty_core::units::capacitance::*;
pub use siqty_core::units::charge::*;
pub use siqty_core::units::current::*;
pub use siqty_core::units::force::*;
pub use siqty_core::units::frequency::*;
pub use siqty_core::units::length::*;
pub use siqty_core::units::mass::*;
pub use siqty_core::units::power::*;
pub use siqty_core::units::pressure::*;
pub use siqty_core::units::resistance::*;
pub use siqty_core::units::temperature::*;
pub use siqty_core::units::time::*;
pub use siqty_core::units::velocity::*;
pub use siqty_core::units::voltage::*;
pub use siqty_core::units::volume::*;
pub use siqty_core::units::volume_flow_rate::*;
pub use siqty_core::units::work::*;

pub use siqty_core::areic_number::AreicNumber;
pub use siqty_core::linear_density::LinearDensity;
pub use siqty_core::linear_number_density::LinearNumberDensity;
pub use siqty_core::lineic_number::LineicNumber;
pub use siqty_core::surface_number_density::SurfaceNumberDensity;
pub use siqty_core::volumic_number::VolumicNumber;
