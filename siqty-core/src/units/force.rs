//! Force.
//!
//! The base unit is the newton ([`Newton`]). Values render through the SI magnitude formatter.
//!
//! ```rust
//! use siqty_core::force::Force;
//!
//! assert_eq!(Force::from_kilonewtons(1.5).to_string(), "1.5 kN");
//! ```

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Force dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum ForceDim {}

impl Dimension for ForceDim {
    const SYMBOL: &'static str = "N";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "N" };
}

/// A force, stored in newtons.
pub type Force = Quantity<ForceDim>;

si_unit!(ForceDim, Meganewton, "MN", 1e6, meganewtons);
si_unit!(ForceDim, Kilonewton, "kN", 1e3, kilonewtons);
si_unit!(ForceDim, Newton, "N", 1.0, newtons);
si_unit!(ForceDim, Millinewton, "mN", 1e-3, millinewtons);
si_unit!(ForceDim, Micronewton, "µN", 1e-6, micronewtons);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn conversions() {
        let f = Force::from_newtons(1.5);
        assert_relative_eq!(f.in_kilonewtons(), 0.0015);
        assert_relative_eq!(f.in_millinewtons(), 1500.0);
        assert_relative_eq!(f.in_micronewtons(), 1_500_000.0);
        assert_relative_eq!(Force::from_kilonewtons(2.0).in_newtons(), 2000.0);
        assert_relative_eq!(Force::from_meganewtons(2.0).in_newtons(), 2_000_000.0);
        assert_relative_eq!(Force::from_millinewtons(2.5).in_newtons(), 0.0025);
    }

    #[test]
    fn operators() {
        let mut f = Force::from_newtons(1.5);
        assert_eq!((f + Force::from_newtons(1.5)).in_newtons(), 3.0);
        assert_eq!((Force::from_newtons(5.0) / Force::from_newtons(3.0)), 5.0 / 3.0);
        f *= 3.0;
        assert_eq!(f.in_newtons(), 4.5);
        f /= 3.0;
        assert_eq!(f.in_newtons(), 1.5);
    }

    #[test]
    fn display() {
        assert_eq!(Force::from_meganewtons(1.5).to_string(), "1.5 MN");
        assert_eq!(Force::from_kilonewtons(1.5).to_string(), "1.5 kN");
        assert_eq!(Force::from_newtons(1.5).to_string(), "1.5 N");
        assert_eq!(Force::from_millinewtons(1.5).to_string(), "1.5 mN");
        assert_eq!(Force::from_micronewtons(1.5).to_string(), "1.5 µN");
        assert_eq!(Force::from_newtons(0.0).to_string(), "0 N");
        assert_eq!(Force::UNKNOWN.to_string(), "? N");
        assert_eq!(Force::from_newtons(-2.0).to_string(), "-2 N");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kilonewtons(v in -1e6f32..1e6f32) {
            let back = Force::from_kilonewtons(v).in_kilonewtons();
            prop_assert!((back - v).abs() <= v.abs() * 1e-6 + f32::EPSILON);
        }
    }
}
