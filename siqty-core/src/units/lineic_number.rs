//! Lineic number (count per unit length, e.g. wavenumber).
//!
//! The base unit is one per metre ([`UnitPerMeter`]). Values render as a plain number followed by `/m`.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Lineic number dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LineicNumberDim {}

impl Dimension for LineicNumberDim {
    const SYMBOL: &'static str = "/m";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m" };
}

/// A lineic number, stored per metre.
pub type LineicNumber = Quantity<LineicNumberDim>;

per_meter_units!(LineicNumberDim);
