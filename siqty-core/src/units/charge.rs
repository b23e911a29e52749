//! Electric charge.
//!
//! The base unit is the coulomb ([`Coulomb`]). Values render through the SI magnitude formatter.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Electric charge dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum ChargeDim {}

impl Dimension for ChargeDim {
    const SYMBOL: &'static str = "C";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "C" };
}

/// An electric charge, stored in coulombs.
pub type Charge = Quantity<ChargeDim>;

si_unit!(ChargeDim, Kilocoulomb, "kC", 1e3, kilocoulombs);
si_unit!(ChargeDim, Coulomb, "C", 1.0, coulombs);
si_unit!(ChargeDim, Millicoulomb, "mC", 1e-3, millicoulombs);
si_unit!(ChargeDim, Microcoulomb, "µC", 1e-6, microcoulombs);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions() {
        let q = Charge::from_coulombs(1.5);
        assert_relative_eq!(q.in_kilocoulombs(), 0.0015);
        assert_relative_eq!(q.in_millicoulombs(), 1500.0);
        assert_relative_eq!(q.in_microcoulombs(), 1_500_000.0);
    }

    #[test]
    fn display() {
        assert_eq!(Charge::from_coulombs(1.5).to_string(), "1.5 C");
        assert_eq!(Charge::from_kilocoulombs(15.5).to_string(), "15.5 kC");
        assert_eq!(Charge::from_coulombs(0.0155).to_string(), "15.5 mC");
        assert_eq!(Charge::from_coulombs(0.0001503).to_string(), "150.3 µC");
        assert_eq!(Charge::from_coulombs(0.00000002).to_string(), "20 nC");
        assert_eq!(Charge::UNKNOWN.to_string(), "? C");
        assert_eq!(Charge::from_coulombs(-2.0).to_string(), "-2 C");
        assert_eq!(Charge::from_coulombs(0.0).to_string(), "0 C");
    }
}
