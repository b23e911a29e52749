//! Volume.
//!
//! The base unit is the cubic metre ([`CubicMeter`]).
//!
//! ```rust
//! use siqty_core::volume::Volume;
//!
//! let tank = Volume::from_liters(250.0);
//! assert!((tank.in_cubic_meters() - 0.25).abs() < 1e-6);
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Volume dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VolumeDim {}

impl Dimension for VolumeDim {
    const SYMBOL: &'static str = "m³";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "m³",
        rungs: &[
            Rung::new::<CubicKilometer>(1e9),
            Rung::new::<CubicMeter>(1.0),
            Rung::new::<CubicDecimeter>(1e-3),
            Rung::new::<Milliliter>(1e-6),
            Rung::new::<CubicMillimeter>(1e-9),
            Rung::new::<CubicMicrometer>(0.0),
        ],
    };
}

/// A volume, stored in cubic metres.
pub type Volume = Quantity<VolumeDim>;

/// Cubic kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km³", dimension = VolumeDim, ratio = 1e9, accessor = cubic_kilometers)]
pub struct CubicKilometer;

/// Cubic metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m³", dimension = VolumeDim, ratio = 1.0, accessor = cubic_meters)]
pub struct CubicMeter;

/// Litre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", dimension = VolumeDim, ratio = 1e-3, accessor = liters)]
pub struct Liter;

/// Cubic decimetre, the same size as a litre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm³", dimension = VolumeDim, ratio = 1e-3, accessor = cubic_decimeters)]
pub struct CubicDecimeter;

/// Millilitre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL", dimension = VolumeDim, ratio = 1e-6, accessor = milliliters)]
pub struct Milliliter;

/// Cubic centimetre, the same size as a millilitre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm³", dimension = VolumeDim, ratio = 1e-6, accessor = cubic_centimeters)]
pub struct CubicCentimeter;

/// Microlitre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µL", dimension = VolumeDim, ratio = 1e-9, accessor = microliters)]
pub struct Microliter;

/// Cubic millimetre, the same size as a microlitre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm³", dimension = VolumeDim, ratio = 1e-9, accessor = cubic_millimeters)]
pub struct CubicMillimeter;

/// Cubic micrometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm³", dimension = VolumeDim, ratio = 1e-18, accessor = cubic_micrometers)]
pub struct CubicMicrometer;

/// Cubic inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in³", dimension = VolumeDim, ratio = 1.638_706_4e-5, accessor = cubic_inches)]
pub struct CubicInch;
