//! Time.
//!
//! The base unit is the second ([`Second`]). A [`core::time::Duration`] converts into a [`Time`] with `From`.
//!
//! ```rust
//! use siqty_core::time::Time;
//! use std::time::Duration;
//!
//! let t: Time = Duration::from_millis(1500).into();
//! assert_eq!(t.in_seconds(), 1.5);
//! assert_eq!(Time::from_seconds(0.5).to_string(), "500 ms");
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use core::time::Duration;
use siqty_derive::Unit;

/// Time dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum TimeDim {}

impl Dimension for TimeDim {
    const SYMBOL: &'static str = "s";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "s",
        rungs: &[
            Rung::new::<Second>(1.0),
            Rung::new::<Millisecond>(1e-3),
            Rung::new::<Microsecond>(1e-6),
            Rung::new::<Nanosecond>(0.0),
        ],
    };
}

/// A span of time, stored in seconds.
pub type Time = Quantity<TimeDim>;

/// Day of 86400 s.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = TimeDim, ratio = 86_400.0, accessor = days)]
pub struct Day;

/// Hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = TimeDim, ratio = 3_600.0, accessor = hours)]
pub struct Hour;

/// Minute.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = TimeDim, ratio = 60.0, accessor = minutes)]
pub struct Minute;

/// Second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = TimeDim, ratio = 1.0, accessor = seconds)]
pub struct Second;

/// Millisecond.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = TimeDim, ratio = 1e-3, accessor = milliseconds)]
pub struct Millisecond;

/// Microsecond.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", dimension = TimeDim, ratio = 1e-6, accessor = microseconds)]
pub struct Microsecond;

/// Nanosecond.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", dimension = TimeDim, ratio = 1e-9, accessor = nanoseconds)]
pub struct Nanosecond;

impl From<Duration> for Time {
    fn from(duration: Duration) -> Self {
        Self::from_base(duration.as_secs_f64() as f32)
    }
}
