//! Frequency.
//!
//! The base unit is the hertz ([`Hertz`]). Values render through the SI magnitude formatter. Frequency and time are
//! reciprocal: `1.0 / frequency` is a period and `1.0 / period` a frequency.
//!
//! ```rust
//! use siqty_core::frequency::Frequency;
//!
//! let f = Frequency::from_revolutions_per_minute(3000.0);
//! assert_eq!(f.to_string(), "50 Hz");
//! assert!(((1.0 / f).in_milliseconds() - 20.0).abs() < 1e-4);
//! ```

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Frequency dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum FrequencyDim {}

impl Dimension for FrequencyDim {
    const SYMBOL: &'static str = "Hz";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "Hz" };
}

/// A frequency, stored in hertz.
pub type Frequency = Quantity<FrequencyDim>;

si_unit!(FrequencyDim, Gigahertz, "GHz", 1e9, gigahertz);
si_unit!(FrequencyDim, Megahertz, "MHz", 1e6, megahertz);
si_unit!(FrequencyDim, Kilohertz, "kHz", 1e3, kilohertz);
si_unit!(FrequencyDim, Hertz, "Hz", 1.0, hertz);
si_unit!(FrequencyDim, Millihertz, "mHz", 1e-3, millihertz);
si_unit!(FrequencyDim, Microhertz, "µHz", 1e-6, microhertz);
si_unit!(FrequencyDim, RevolutionPerMinute, "rpm", 1.0 / 60.0, revolutions_per_minute);
si_unit!(FrequencyDim, RadianPerSecond, "rad/s", 1.0 / core::f64::consts::TAU, radians_per_second);
