//! Conversions between `siqty` quantity types and [`SiqtyQuantity`] for downstream Rust crates.
//!
//! Every predefined quantity converts *into* a [`SiqtyQuantity`] expressed in its base unit, and converts back *from*
//! a [`SiqtyQuantity`] in any unit of the same dimension.
//!
//! ## Converting to FFI format
//!
//! ```rust
//! use siqty::Current;
//! use siqty_ffi::{SiqtyQuantity, UnitId};
//!
//! let q: SiqtyQuantity = Current::from_milliamperes(250.0).into();
//! assert_eq!(q.unit, UnitId::Ampere);
//! assert_eq!(q.value, 0.25);
//! ```
//!
//! ## Converting from FFI format
//!
//! ```rust
//! use siqty::Pressure;
//! use siqty_ffi::{SiqtyQuantity, UnitId};
//!
//! let q = SiqtyQuantity::new(1.5, UnitId::Bar);
//! let p: Pressure = q.try_into().unwrap();
//! assert_eq!(p.in_kilopascals(), 150.0);
//! ```
//!
//! ## Error handling
//!
//! ```rust
//! use siqty::Length;
//! use siqty_ffi::{SiqtyQuantity, UnitId, SIQTY_ERR_INCOMPATIBLE_DIM};
//!
//! let time_qty = SiqtyQuantity::new(60.0, UnitId::Second);
//! let result: Result<Length, i32> = time_qty.try_into();
//! assert_eq!(result, Err(SIQTY_ERR_INCOMPATIBLE_DIM));
//! ```

use crate::{impl_quantity_ffi, UnitId};

// =============================================================================
// Ladder-formatted quantities
// =============================================================================

impl_quantity_ffi!(siqty::Length, siqty::Meter, UnitId::Meter);
impl_quantity_ffi!(siqty::Area, siqty::SquareMeter, UnitId::SquareMeter);
impl_quantity_ffi!(siqty::Volume, siqty::CubicMeter, UnitId::CubicMeter);
impl_quantity_ffi!(siqty::Mass, siqty::Kilogram, UnitId::Kilogram);
impl_quantity_ffi!(siqty::Time, siqty::Second, UnitId::Second);
impl_quantity_ffi!(siqty::Velocity, siqty::MeterPerSecond, UnitId::MeterPerSecond);
impl_quantity_ffi!(siqty::Pressure, siqty::Pascal, UnitId::Pascal);
impl_quantity_ffi!(siqty::VolumeFlowRate, siqty::CubicMeterPerSecond, UnitId::CubicMeterPerSecond);

// =============================================================================
// SI-formatted quantities
// =============================================================================

impl_quantity_ffi!(siqty::Force, siqty::Newton, UnitId::Newton);
impl_quantity_ffi!(siqty::Power, siqty::Watt, UnitId::Watt);
impl_quantity_ffi!(siqty::Work, siqty::Joule, UnitId::Joule);
impl_quantity_ffi!(siqty::Current, siqty::Ampere, UnitId::Ampere);
impl_quantity_ffi!(siqty::Charge, siqty::Coulomb, UnitId::Coulomb);
impl_quantity_ffi!(siqty::Voltage, siqty::Volt, UnitId::Volt);
impl_quantity_ffi!(siqty::Resistance, siqty::Ohm, UnitId::Ohm);
impl_quantity_ffi!(siqty::Capacitance, siqty::Farad, UnitId::Farad);
impl_quantity_ffi!(siqty::Frequency, siqty::Hertz, UnitId::Hertz);

// =============================================================================
// Per-length, per-area and per-volume counts
// =============================================================================

impl_quantity_ffi!(siqty::LineicNumber, siqty::lineic_number::UnitPerMeter, UnitId::LineicPerMeter);
impl_quantity_ffi!(siqty::LinearDensity, siqty::linear_density::UnitPerMeter, UnitId::LinearDensityPerMeter);
impl_quantity_ffi!(
    siqty::LinearNumberDensity,
    siqty::linear_number_density::UnitPerMeter,
    UnitId::LinearNumberPerMeter
);
impl_quantity_ffi!(siqty::AreicNumber, siqty::areic_number::UnitPerSquareMeter, UnitId::AreicPerSquareMeter);
impl_quantity_ffi!(
    siqty::SurfaceNumberDensity,
    siqty::surface_number_density::UnitPerSquareMeter,
    UnitId::SurfacePerSquareMeter
);
impl_quantity_ffi!(siqty::VolumicNumber, siqty::volumic_number::UnitPerCubicMeter, UnitId::VolumicPerCubicMeter);
