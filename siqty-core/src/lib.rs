//! Core types for strongly typed `f32` physical quantities.
//!
//! `siqty-core` provides a small units model sized for firmware and other places where a value travels as a single
//! `f32`:
//!
//! - A *dimension* (length, voltage, pressure, …) is a zero-sized marker implementing [`Dimension`]. It also picks
//!   how values are rendered.
//! - A value of a dimension is a [`Quantity<D>`], backed by one `f32` in the dimension's base unit.
//! - A *unit* is a zero-sized marker implementing [`Unit`] with a fixed ratio to the base unit. Each unit generates
//!   a `from_*` constructor and an `in_*` accessor.
//! - Physically meaningful products and quotients between dimensions (`Voltage / Current = Resistance`, …) are
//!   ordinary operators.
//! - `Display` renders values with a readable magnitude: SI prefixes (`"1.2433 kV"`), a per-dimension table of
//!   units (`"1.5 km²"`), or a plain number with a per-length suffix (`"2.5/m"`).
//!
//! Most users should depend on `siqty` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! ```rust
//! use siqty_core::current::Current;
//! use siqty_core::resistance::Resistance;
//! use siqty_core::voltage::Voltage;
//!
//! let v: Voltage = Resistance::from_kiloohms(2.2) * Current::from_milliamperes(5.0);
//! assert!((v.in_volts() - 11.0).abs() < 1e-5);
//! assert_eq!(Voltage::from_volts(1243.3).to_string(), "1.2433 kV");
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```compile_fail
//! use siqty_core::length::Length;
//! use siqty_core::time::Time;
//!
//! let _ = Length::from_meters(1.0) + Time::from_seconds(1.0);
//! ```
//!
//! # Unknown values
//!
//! There is no error type for arithmetic. A value that could not be determined is carried as NaN
//! ([`Quantity::UNKNOWN`], also the [`Default`]); it propagates through every operation and renders as `"? <unit>"`.
//! Division by zero follows IEEE rules and yields infinity, which is *not* reported as unknown.
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for quantities (raw base-unit `f32`), the [`serde_with_unit`]
//!   helper, and loading [`FormatOptions`] from TOML.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod config;
mod dimension;
mod error;
pub mod format;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{FormatOptions, TemperatureUnit};
pub use dimension::{Dimension, Reciprocal};
pub use error::{Error, Result};
pub use format::{format_g, format_simple_si_value, write_simple_si_value, DisplayStyle, Rung, ShortString, Written};
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantities (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantities (grouped by dimension).
///
/// These are defined in `siqty-core` so the cross-dimension operators can be implemented without running into Rust's
/// orphan rules.
pub mod units;

pub use units::area;
pub use units::areic_number;
pub use units::capacitance;
pub use units::charge;
pub use units::current;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::linear_density;
pub use units::linear_number_density;
pub use units::lineic_number;
pub use units::mass;
pub use units::power;
pub use units::pressure;
pub use units::resistance;
pub use units::surface_number_density;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
pub use units::voltage;
pub use units::volume;
pub use units::volume_flow_rate;
pub use units::volumic_number;
pub use units::work;
