//! Surface number density (items per unit area).
//!
//! The base unit is one per square metre ([`UnitPerSquareMeter`]). Values render as a plain number followed by
//! `/m²`.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Surface number density dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum SurfaceNumberDensityDim {}

impl Dimension for SurfaceNumberDensityDim {
    const SYMBOL: &'static str = "/m²";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m²" };
}

/// A surface number density, stored per square metre.
pub type SurfaceNumberDensity = Quantity<SurfaceNumberDensityDim>;

per_square_meter_units!(SurfaceNumberDensityDim);
