//! Predefined quantities grouped by dimension.
//!
//! Every module defines a dimension marker, a `Quantity` alias, and the unit markers that generate its
//! `from_*`/`in_*` pairs. The base unit (ratio `1.0`) is the unit values are stored in.
//!
//! ## Modules
//!
//! Ladder-formatted (rendered in the largest fitting unit of a fixed table):
//!
//! - [`length`]: metres, plus imperial units and the light-year.
//! - [`area`]: square metres, hectares, acres.
//! - [`volume`]: cubic metres and litres.
//! - [`mass`]: kilograms, tonnes, pounds.
//! - [`time`]: seconds through days; converts from [`core::time::Duration`].
//! - [`velocity`]: metres per second, km/h, mph, knots.
//! - [`pressure`]: pascals, bar, psi.
//! - [`volume_flow_rate`]: cubic metres and litres per second.
//!
//! SI-prefixed (rendered with [`format_simple_si_value`](crate::format_simple_si_value)):
//!
//! - [`force`], [`power`], [`work`], [`current`], [`charge`], [`voltage`], [`resistance`], [`capacitance`],
//!   [`frequency`].
//!
//! Per-length, per-area and per-volume counts (rendered as a plain number with a `/m`, `/m²` or `/m³` suffix):
//!
//! - [`lineic_number`], [`linear_density`], [`linear_number_density`].
//! - [`areic_number`], [`surface_number_density`].
//! - [`volumic_number`].
//!
//! Outside the generic model:
//!
//! - [`temperature`]: absolute temperatures and temperature differences.
//!
//! Cross-quantity operators (`Length * Length = Area`, `Voltage / Current = Resistance`, ...) live in
//! `relations` and need no import.

pub mod area;
pub mod areic_number;
pub mod capacitance;
pub mod charge;
pub mod current;
pub mod force;
pub mod frequency;
pub mod length;
pub mod linear_density;
pub mod linear_number_density;
pub mod lineic_number;
pub mod mass;
pub mod power;
pub mod pressure;
mod relations;
pub mod resistance;
pub mod surface_number_density;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod voltage;
pub mod volume;
pub mod volume_flow_rate;
pub mod volumic_number;
pub mod work;
