//! Electric current.
//!
//! The base unit is the ampere ([`Ampere`]). Values render through the SI magnitude formatter.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Electric current dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum CurrentDim {}

impl Dimension for CurrentDim {
    const SYMBOL: &'static str = "A";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "A" };
}

/// An electric current, stored in amperes.
pub type Current = Quantity<CurrentDim>;

si_unit!(CurrentDim, Megaampere, "MA", 1e6, megaamperes);
si_unit!(CurrentDim, Kiloampere, "kA", 1e3, kiloamperes);
si_unit!(CurrentDim, Ampere, "A", 1.0, amperes);
si_unit!(CurrentDim, Milliampere, "mA", 1e-3, milliamperes);
si_unit!(CurrentDim, Microampere, "µA", 1e-6, microamperes);
