//! Capacitance.
//!
//! The base unit is the farad ([`Farad`]). Values render through the SI magnitude formatter.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Capacitance dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum CapacitanceDim {}

impl Dimension for CapacitanceDim {
    const SYMBOL: &'static str = "F";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "F" };
}

/// A capacitance, stored in farads.
pub type Capacitance = Quantity<CapacitanceDim>;

si_unit!(CapacitanceDim, Kilofarad, "kF", 1e3, kilofarads);
si_unit!(CapacitanceDim, Farad, "F", 1.0, farads);
si_unit!(CapacitanceDim, Millifarad, "mF", 1e-3, millifarads);
si_unit!(CapacitanceDim, Microfarad, "µF", 1e-6, microfarads);
si_unit!(CapacitanceDim, Nanofarad, "nF", 1e-9, nanofarads);
si_unit!(CapacitanceDim, Picofarad, "pF", 1e-12, picofarads);
