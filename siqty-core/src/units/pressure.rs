//! Pressure.
//!
//! The base unit is the pascal ([`Pascal`]). `Force / Area` yields a [`Pressure`].
//!
//! Values from 10 kPa up to (but excluding) 2 MPa render in bar, which keeps atmospheric and tyre pressures readable.
//!
//! ```rust
//! use siqty_core::pressure::Pressure;
//!
//! assert_eq!(Pressure::from_hectopascals(1013.25).to_string(), "1.01325 bar");
//! assert_eq!(Pressure::from_megapascals(32.0).to_string(), "32 MPa");
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Pressure dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum PressureDim {}

impl Dimension for PressureDim {
    const SYMBOL: &'static str = "Pa";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "Pa",
        rungs: &[
            Rung::new::<Gigapascal>(1e9),
            Rung::new::<Megapascal>(2e6),
            Rung::new::<Bar>(1e4),
            Rung::new::<Kilopascal>(1e3),
            Rung::new::<Pascal>(1.0),
            Rung::new::<Millipascal>(1e-3),
            Rung::new::<Micropascal>(0.0),
        ],
    };
}

/// A pressure, stored in pascals.
pub type Pressure = Quantity<PressureDim>;

/// Gigapascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "GPa", dimension = PressureDim, ratio = 1e9, accessor = gigapascals)]
pub struct Gigapascal;

/// Megapascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MPa", dimension = PressureDim, ratio = 1e6, accessor = megapascals)]
pub struct Megapascal;

/// Bar.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", dimension = PressureDim, ratio = 1e5, accessor = bars)]
pub struct Bar;

/// Kilopascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kPa", dimension = PressureDim, ratio = 1e3, accessor = kilopascals)]
pub struct Kilopascal;

/// Hectopascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hPa", dimension = PressureDim, ratio = 100.0, accessor = hectopascals)]
pub struct Hectopascal;

/// Pascal (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", dimension = PressureDim, ratio = 1.0, accessor = pascals)]
pub struct Pascal;

/// Millipascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mPa", dimension = PressureDim, ratio = 1e-3, accessor = millipascals)]
pub struct Millipascal;

/// Micropascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µPa", dimension = PressureDim, ratio = 1e-6, accessor = micropascals)]
pub struct Micropascal;

/// Pound-force per square inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "psi", dimension = PressureDim, ratio = 6_894.757_293_2, accessor = psi)]
pub struct PoundPerSquareInch;
