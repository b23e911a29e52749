//! Linear density (amount per unit length).
//!
//! The base unit is one per metre ([`UnitPerMeter`]). Values render as a plain number followed by `/m`.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Linear density dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LinearDensityDim {}

impl Dimension for LinearDensityDim {
    const SYMBOL: &'static str = "/m";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m" };
}

/// A linear density, stored per metre.
pub type LinearDensity = Quantity<LinearDensityDim>;

per_meter_units!(LinearDensityDim);
