//! Linear number density (items per unit length).
//!
//! The base unit is one per metre ([`UnitPerMeter`]). Values render as a plain number followed by `/m`.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Linear number density dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LinearNumberDensityDim {}

impl Dimension for LinearNumberDensityDim {
    const SYMBOL: &'static str = "/m";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m" };
}

/// A linear number density, stored per metre.
pub type LinearNumberDensity = Quantity<LinearNumberDensityDim>;

per_meter_units!(LinearNumberDensityDim);
