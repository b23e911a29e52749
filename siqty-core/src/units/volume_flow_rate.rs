//! Volume flow rate.
//!
//! The base unit is the cubic metre per second ([`CubicMeterPerSecond`]). `Volume / Time` yields a
//! [`VolumeFlowRate`], and `VolumeFlowRate * Time` gives back a volume.

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Volume flow rate dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VolumeFlowRateDim {}

impl Dimension for VolumeFlowRateDim {
    const SYMBOL: &'static str = "m³/s";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "m³/s",
        rungs: &[
            Rung::new::<CubicMeterPerSecond>(1.0),
            Rung::new::<LiterPerSecond>(1e-3),
            Rung::new::<MilliliterPerSecond>(0.0),
        ],
    };
}

/// A volume flow rate, stored in cubic metres per second.
pub type VolumeFlowRate = Quantity<VolumeFlowRateDim>;

/// Cubic metre per second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m³/s", dimension = VolumeFlowRateDim, ratio = 1.0, accessor = cubic_meters_per_second)]
pub struct CubicMeterPerSecond;

/// Litre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L/s", dimension = VolumeFlowRateDim, ratio = 1e-3, accessor = liters_per_second)]
pub struct LiterPerSecond;

/// Millilitre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL/s", dimension = VolumeFlowRateDim, ratio = 1e-6, accessor = milliliters_per_second)]
pub struct MilliliterPerSecond;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions() {
        let q = VolumeFlowRate::from_cubic_meters_per_second(0.5);
        assert_relative_eq!(q.in_liters_per_second(), 500.0);
        assert_relative_eq!(q.in_milliliters_per_second(), 500_000.0);
        assert_relative_eq!(VolumeFlowRate::from_milliliters_per_second(1500.0).in_liters_per_second(), 1.5);
    }

    #[test]
    fn display_ladder() {
        assert_eq!(VolumeFlowRate::UNKNOWN.to_string(), "? m³/s");
        assert_eq!(VolumeFlowRate::from_cubic_meters_per_second(2.0).to_string(), "2 m³/s");
        assert_eq!(VolumeFlowRate::from_liters_per_second(500.0).to_string(), "500 L/s");
        assert_eq!(VolumeFlowRate::from_milliliters_per_second(1.5).to_string(), "1.5 mL/s");
        assert_eq!(VolumeFlowRate::from_liters_per_second(-2.0).to_string(), "-2 L/s");
        assert_eq!(VolumeFlowRate::ZERO.to_string(), "0 m³/s");
    }
}
