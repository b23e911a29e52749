//! Electrical resistance.
//!
//! The base unit is the ohm ([`Ohm`]). Values render through the SI magnitude formatter.

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};

/// Resistance dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum ResistanceDim {}

impl Dimension for ResistanceDim {
    const SYMBOL: &'static str = "Ω";
    const STYLE: DisplayStyle = DisplayStyle::Si { unit: "Ω" };
}

/// A resistance, stored in ohms.
pub type Resistance = Quantity<ResistanceDim>;

si_unit!(ResistanceDim, Gigaohm, "GΩ", 1e9, gigaohms);
si_unit!(ResistanceDim, Megaohm, "MΩ", 1e6, megaohms);
si_unit!(ResistanceDim, Kiloohm, "kΩ", 1e3, kiloohms);
si_unit!(ResistanceDim, Ohm, "Ω", 1.0, ohms);
si_unit!(ResistanceDim, Milliohm, "mΩ", 1e-3, milliohms);
si_unit!(ResistanceDim, Microohm, "µΩ", 1e-6, microohms);
si_unit!(ResistanceDim, Nanoohm, "nΩ", 1e-9, nanoohms);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions() {
        let r = Resistance::from_ohms(1.5);
        assert_relative_eq!(r.in_kiloohms(), 0.0015);
        assert_relative_eq!(r.in_milliohms(), 1500.0);
        assert_relative_eq!(r.in_microohms(), 1_500_000.0);
        assert_relative_eq!(r.in_nanoohms(), 1.5e9, max_relative = 1e-6);
        assert_relative_eq!(Resistance::from_gigaohms(1.0).in_megaohms(), 1000.0);
    }

    #[test]
    fn display() {
        assert_eq!(Resistance::from_gigaohms(15.5).to_string(), "15.5 GΩ");
        assert_eq!(Resistance::from_megaohms(15.5).to_string(), "15.5 MΩ");
        assert_eq!(Resistance::from_kiloohms(15.5).to_string(), "15.5 kΩ");
        assert_eq!(Resistance::from_ohms(1.5).to_string(), "1.5 Ω");
        assert_eq!(Resistance::from_ohms(0.0155).to_string(), "15.5 mΩ");
        assert_eq!(Resistance::from_ohms(0.0001503).to_string(), "150.3 µΩ");
        assert_eq!(Resistance::from_ohms(0.00000002).to_string(), "20 nΩ");
        assert_eq!(Resistance::UNKNOWN.to_string(), "? Ω");
        assert_eq!(Resistance::from_ohms(-2.0).to_string(), "-2 Ω");
        assert_eq!(Resistance::from_ohms(0.0).to_string(), "0 Ω");
    }
}
