//! Areic number (count per unit area).
//!
//! The base unit is one per square metre ([`UnitPerSquareMeter`]). Values render as a plain number followed by
//! `/m²`.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Areic number dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum AreicNumberDim {}

impl Dimension for AreicNumberDim {
    const SYMBOL: &'static str = "/m²";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m²" };
}

/// An areic number, stored per square metre.
pub type AreicNumber = Quantity<AreicNumberDim>;

per_square_meter_units!(AreicNumberDim);
