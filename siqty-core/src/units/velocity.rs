//! Velocity.
//!
//! The base unit is the metre per second ([`MeterPerSecond`]). `Length / Time` yields a [`Velocity`].
//!
//! ```rust
//! use siqty_core::length::Length;
//! use siqty_core::time::Time;
//!
//! let v = Length::from_kilometers(36.0) / Time::from_hours(1.0);
//! assert!((v.in_meters_per_second() - 10.0).abs() < 1e-5);
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Velocity dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VelocityDim {}

impl Dimension for VelocityDim {
    const SYMBOL: &'static str = "m/s";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "m/s",
        rungs: &[
            Rung::new::<KilometerPerSecond>(1e3),
            Rung::new::<MeterPerSecond>(1.0),
            Rung::new::<MillimeterPerSecond>(1e-3),
            Rung::new::<MicrometerPerSecond>(0.0),
        ],
    };
}

/// A velocity, stored in metres per second.
pub type Velocity = Quantity<VelocityDim>;

/// Kilometre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/s", dimension = VelocityDim, ratio = 1e3, accessor = kilometers_per_second)]
pub struct KilometerPerSecond;

/// Kilometre per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", dimension = VelocityDim, ratio = 1.0 / 3.6, accessor = kilometers_per_hour)]
pub struct KilometerPerHour;

/// Metre per second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = VelocityDim, ratio = 1.0, accessor = meters_per_second)]
pub struct MeterPerSecond;

/// Millimetre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm/s", dimension = VelocityDim, ratio = 1e-3, accessor = millimeters_per_second)]
pub struct MillimeterPerSecond;

/// Micrometre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm/s", dimension = VelocityDim, ratio = 1e-6, accessor = micrometers_per_second)]
pub struct MicrometerPerSecond;

/// International mile per hour, exactly 0.44704 m/s.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mph", dimension = VelocityDim, ratio = 0.447_04, accessor = miles_per_hour)]
pub struct MilePerHour;

/// Knot, one nautical mile (1852 m) per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kn", dimension = VelocityDim, ratio = 1852.0 / 3600.0, accessor = knots)]
pub struct Knot;
