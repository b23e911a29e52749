//! Mass.
//!
//! The base unit is the kilogram ([`Kilogram`]).

use crate::format::{DisplayStyle, Rung};
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Mass dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum MassDim {}

impl Dimension for MassDim {
    const SYMBOL: &'static str = "kg";
    const STYLE: DisplayStyle = DisplayStyle::Ladder {
        base: "kg",
        rungs: &[
            Rung::new::<Tonne>(1e3),
            Rung::new::<Kilogram>(1.0),
            Rung::new::<Gram>(1e-3),
            Rung::new::<Milligram>(1e-6),
            Rung::new::<Microgram>(0.0),
        ],
    };
}

/// A mass, stored in kilograms.
pub type Mass = Quantity<MassDim>;

/// Metric tonne.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = MassDim, ratio = 1e3, accessor = tons)]
pub struct Tonne;

/// Kilogram (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = MassDim, ratio = 1.0, accessor = kilograms)]
pub struct Kilogram;

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = MassDim, ratio = 1e-3, accessor = grams)]
pub struct Gram;

/// Milligram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mg", dimension = MassDim, ratio = 1e-6, accessor = milligrams)]
pub struct Milligram;

/// Microgram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µg", dimension = MassDim, ratio = 1e-9, accessor = micrograms)]
pub struct Microgram;

/// International avoirdupois pound, exactly 0.45359237 kg.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = MassDim, ratio = 0.453_592_37, accessor = pounds)]
pub struct Pound;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn conversions() {
        let m = Mass::from_kilograms(1.5);
        assert_relative_eq!(m.in_tons(), 0.0015);
        assert_relative_eq!(m.in_grams(), 1500.0);
        assert_relative_eq!(m.in_milligrams(), 1_500_000.0);
        assert_relative_eq!(m.in_micrograms(), 1.5e9, max_relative = 1e-6);
        assert_relative_eq!(Mass::from_kilograms(1.0).in_pounds(), 2.204_622_6, max_relative = 1e-6);
        assert_relative_eq!(Mass::from_pounds(1.0).in_grams(), 453.592_37, max_relative = 1e-6);
    }

    #[test]
    fn display_ladder() {
        assert_eq!(Mass::from_kilograms(15.5).to_string(), "15.5 kg");
        assert_eq!(Mass::from_tons(1.5).to_string(), "1.5 t");
        assert_eq!(Mass::from_grams(250.0).to_string(), "250 g");
        assert_eq!(Mass::from_grams(0.0155).to_string(), "15.5 mg");
        assert_eq!(Mass::from_grams(0.0001503).to_string(), "150.3 µg");
        assert_eq!(Mass::UNKNOWN.to_string(), "? kg");
        assert_eq!(Mass::from_kilograms(-2.0).to_string(), "-2 kg");
        assert_eq!(Mass::from_kilograms(0.0).to_string(), "0 kg");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_pounds(v in -1e6f32..1e6f32) {
            let back = Mass::from_pounds(v).in_pounds();
            prop_assert!((back - v).abs() <= v.abs() * 1e-6 + f32::EPSILON);
        }
    }
}
