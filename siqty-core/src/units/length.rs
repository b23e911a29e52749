//! Length.
//!
//! The base unit is the metre ([`Meter`]). Values render on a km / m / cm / mm / µm / nm ladder.
//!
//! ```rust
//! use siqty_core::length::Length;
//!
//! let d = Length::from_feet(10.0);
//! assert!((d.in_meters() - 3.048).abs() < 1e-6);
//! assert_eq!(Length::from_meters(0.5).to_string(), "50 cm");
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Length dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LengthDim {}

impl Dimension for LengthDim {
    const SYMBOL: &'static str = "m";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "m",
        rungs: &[
            Rung::new::<Kilometer>(1e3),
            Rung::new::<Meter>(1.0),
            Rung::new::<Centimeter>(0.1),
            Rung::new::<Millimeter>(1e-3),
            Rung::new::<Micrometer>(1e-6),
            Rung::new::<Nanometer>(0.0),
        ],
    };
}

/// A length, stored in metres.
pub type Length = Quantity<LengthDim>;

/// Kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = LengthDim, ratio = 1e3, accessor = kilometers)]
pub struct Kilometer;

/// Metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = LengthDim, ratio = 1.0, accessor = meters)]
pub struct Meter;

/// Decimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", dimension = LengthDim, ratio = 0.1, accessor = decimeters)]
pub struct Decimeter;

/// Centimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = LengthDim, ratio = 1e-2, accessor = centimeters)]
pub struct Centimeter;

/// Millimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = LengthDim, ratio = 1e-3, accessor = millimeters)]
pub struct Millimeter;

/// Micrometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", dimension = LengthDim, ratio = 1e-6, accessor = micrometers)]
pub struct Micrometer;

/// Nanometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", dimension = LengthDim, ratio = 1e-9, accessor = nanometers)]
pub struct Nanometer;

/// International inch, exactly 25.4 mm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = LengthDim, ratio = 0.0254, accessor = inches)]
pub struct Inch;

/// International foot, exactly 0.3048 m.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = LengthDim, ratio = 0.3048, accessor = feet)]
pub struct Foot;

/// International yard, exactly 0.9144 m.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = LengthDim, ratio = 0.9144, accessor = yards)]
pub struct Yard;

/// Light-year (Julian year of 365.25 days at `c`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", dimension = LengthDim, ratio = 9_460_730_472_580_800.0, accessor = light_years)]
pub struct LightYear;
