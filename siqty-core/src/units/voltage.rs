//! Voltage.
//!
//! The base unit is the volt ([`Volt`]). Values render through the SI magnitude formatter.
//!
//! ```rust
//! use siqty_core::voltage::Voltage;
//!
//! assert_eq!(Voltage::from_volts(1243.3).to_string(), "1.2433 kV");
//! ```

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Voltage dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VoltageDim {}

impl Dimension for VoltageDim {
    const SYMBOL: &'static str = "V";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "V" };
}

/// A voltage, stored in volts.
pub type Voltage = Quantity<VoltageDim>;

si_unit!(VoltageDim, Kilovolt, "kV", 1e3, kilovolts);
si_unit!(VoltageDim, Volt, "V", 1.0, volts);
si_unit!(VoltageDim, Millivolt, "mV", 1e-3, millivolts);
si_unit!(VoltageDim, Microvolt, "µV", 1e-6, microvolts);
