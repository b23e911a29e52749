//! Work and energy.
//!
//! The base unit is the joule ([`Joule`]). Values render through the SI magnitude formatter. Watt-hours are provided
//! for electrical energy.
//!
//! ```rust
//! use siqty_core::work::Work;
//!
//! let e = Work::from_kilowatt_hours(1.0);
//! assert_eq!(e.to_string(), "3.6 MJ");
//! ```

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Work (energy) dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum WorkDim {}

impl Dimension for WorkDim {
    const SYMBOL: &'static str = "J";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "J" };
}

/// Work or energy, stored in joules.
pub type Work = Quantity<WorkDim>;

si_unit!(WorkDim, Gigajoule, "GJ", 1e9, gigajoules);
si_unit!(WorkDim, Megajoule, "MJ", 1e6, megajoules);
si_unit!(WorkDim, Kilojoule, "kJ", 1e3, kilojoules);
si_unit!(WorkDim, Joule, "J", 1.0, joules);
si_unit!(WorkDim, Millijoule, "mJ", 1e-3, millijoules);
si_unit!(WorkDim, Microjoule, "µJ", 1e-6, microjoules);
si_unit!(WorkDim, KilowattHour, "kWh", 3.6e6, kilowatt_hours);
si_unit!(WorkDim, WattHour, "Wh", 3.6e3, watt_hours);
