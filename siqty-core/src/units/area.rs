//! Area.
//!
//! The base unit is the square metre ([`SquareMeter`]).
//!
//! ```rust
//! use siqty_core::area::Area;
//!
//! let plot = Area::from_square_meters(2500.0);
//! assert!((plot.in_acres() - 0.617_762_5).abs() < 1e-6);
//! assert_eq!(Area::from_square_kilometers(1.5).to_string(), "1.5 km²");
//! ```

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Area dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum AreaDim {}

impl Dimension for AreaDim {
    const SYMBOL: &'static str = "m²";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "m²",
        rungs: &[
            Rung::new::<SquareKilometer>(1e6),
            Rung::new::<Hectare>(1e4),
            Rung::new::<SquareMeter>(1.0),
            Rung::new::<SquareDecimeter>(1e-2),
            Rung::new::<SquareMillimeter>(1e-6),
            Rung::new::<SquareMicrometer>(0.0),
        ],
    };
}

/// An area, stored in square metres.
pub type Area = Quantity<AreaDim>;

/// Square kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km²", dimension = AreaDim, ratio = 1e6, accessor = square_kilometers)]
pub struct SquareKilometer;

/// Hectare.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ha", dimension = AreaDim, ratio = 1e4, accessor = hectares)]
pub struct Hectare;

/// Are.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a", dimension = AreaDim, ratio = 100.0, accessor = ares)]
pub struct Are;

/// Square metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", dimension = AreaDim, ratio = 1.0, accessor = square_meters)]
pub struct SquareMeter;

/// Square decimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm²", dimension = AreaDim, ratio = 1e-2, accessor = square_decimeters)]
pub struct SquareDecimeter;

/// Square centimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm²", dimension = AreaDim, ratio = 1e-4, accessor = square_centimeters)]
pub struct SquareCentimeter;

/// Square millimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm²", dimension = AreaDim, ratio = 1e-6, accessor = square_millimeters)]
pub struct SquareMillimeter;

/// Square micrometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm²", dimension = AreaDim, ratio = 1e-12, accessor = square_micrometers)]
pub struct SquareMicrometer;

/// International acre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ac", dimension = AreaDim, ratio = 4046.856_422_4, accessor = acres)]
pub struct Acre;

/// Square inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in²", dimension = AreaDim, ratio = 0.000_645_16, accessor = square_inches)]
pub struct SquareInch;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn metric_conversions() {
        let a = Area::from_square_meters(1.5);
        assert_relative_eq!(a.in_square_decimeters(), 150.0);
        assert_relative_eq!(a.in_square_centimeters(), 15_000.0);
        assert_relative_eq!(a.in_square_millimeters(), 1_500_000.0);
        assert_relative_eq!(a.in_square_micrometers(), 1.5e12, max_relative = 1e-6);
        assert_relative_eq!(Area::from_hectares(1.0).in_ares(), 100.0);
        assert_relative_eq!(Area::from_square_kilometers(1.0).in_hectares(), 100.0);
    }

    #[test]
    fn imperial_conversions() {
        assert_relative_eq!(Area::from_square_meters(1.0).in_acres(), 0.000_247_105, max_relative = 1e-5);
        assert_relative_eq!(Area::from_square_meters(1.0).in_square_inches(), 1550.0031, max_relative = 1e-6);

        let plot = Area::from_square_meters(2500.0);
        assert_relative_eq!(plot.in_acres(), 0.617_762_5, max_relative = 1e-5);
        assert_relative_eq!(plot.in_square_inches(), 3_875_007.75, max_relative = 1e-6);
    }

    #[test]
    fn display_ladder() {
        assert_eq!(Area::from_square_meters(1.5).to_string(), "1.5 m²");
        assert_eq!(Area::from_square_kilometers(1.5).to_string(), "1.5 km²");
        assert_eq!(Area::from_hectares(2.5).to_string(), "2.5 ha");
        assert_eq!(Area::from_square_centimeters(500.0).to_string(), "5 dm²");
        assert_eq!(Area::from_square_millimeters(3.0).to_string(), "3 mm²");
        assert_eq!(Area::from_square_micrometers(7.0).to_string(), "7 µm²");
        assert_eq!(Area::from_square_meters(-1.5).to_string(), "-1.5 m²");
        assert_eq!(Area::ZERO.to_string(), "0 m²");
        assert_eq!(Area::UNKNOWN.to_string(), "? m²");
    }

    #[test]
    fn display_threshold_is_inclusive() {
        assert_eq!(Area::from_square_meters(1e6).to_string(), "1 km²");
        assert_eq!(Area::from_square_meters(1e4).to_string(), "1 ha");
        assert_eq!(Area::from_square_meters(1.0).to_string(), "1 m²");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_hectares(v in -1e5f32..1e5f32) {
            let back = Area::from_hectares(v).in_hectares();
            prop_assert!((back - v).abs() <= v.abs() * 1e-6 + f32::EPSILON);
        }
    }
}
