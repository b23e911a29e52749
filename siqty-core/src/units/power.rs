//! Power.
//!
//! The base unit is the watt ([`Watt`]). Values render through the SI magnitude formatter.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Power dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum PowerDim {}

impl Dimension for PowerDim {
    const SYMBOL: &'static str = "W";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "W" };
}

/// A power, stored in watts.
pub type Power = Quantity<PowerDim>;

si_unit!(PowerDim, Gigawatt, "GW", 1e9, gigawatts);
si_unit!(PowerDim, Megawatt, "MW", 1e6, megawatts);
si_unit!(PowerDim, Kilowatt, "kW", 1e3, kilowatts);
si_unit!(PowerDim, Watt, "W", 1.0, watts);
si_unit!(PowerDim, Milliwatt, "mW", 1e-3, milliwatts);
si_unit!(PowerDim, Microwatt, "µW", 1e-6, microwatts);
