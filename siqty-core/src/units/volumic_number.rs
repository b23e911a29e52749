//! Volumic number (count per unit volume, e.g. particle concentration).
//!
//! The base unit is one per cubic metre ([`UnitPerCubicMeter`]). Values render as a plain number followed by `/m³`.
//!
//! ```rust
//! use siqty_core::volumic_number::VolumicNumber;
//!
//! let pm = VolumicNumber::from_units_per_cubic_centimeter(2.0);
//! assert_eq!(pm.to_string(), "2e+06/m³");
//! ```

use crate::format::DisplayStyle;
use crate::{Dimension, Quantity};
use siqty_derive::Unit;

/// Volumic number dimension.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum VolumicNumberDim {}

impl Dimension for VolumicNumberDim {
    const SYMBOL: &'static str = "/m³";
    const STYLE: DisplayStyle = DisplayStyle::PerUnit { suffix: "/m³" };
}

/// A volumic number, stored per cubic metre.
pub type VolumicNumber = Quantity<VolumicNumberDim>;

/// Billions per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "G/m³", dimension = VolumicNumberDim, ratio = 1e9, accessor = giga_units_per_cubic_meter)]
pub struct GigaUnitPerCubicMeter;

/// Millions per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "M/m³", dimension = VolumicNumberDim, ratio = 1e6, accessor = mega_units_per_cubic_meter)]
pub struct MegaUnitPerCubicMeter;

/// Thousands per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "k/m³", dimension = VolumicNumberDim, ratio = 1e3, accessor = kilo_units_per_cubic_meter)]
pub struct KiloUnitPerCubicMeter;

/// Per cubic metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/m³", dimension = VolumicNumberDim, ratio = 1.0, accessor = units_per_cubic_meter)]
pub struct UnitPerCubicMeter;

/// Thousandths per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/m³", dimension = VolumicNumberDim, ratio = 1e-3, accessor = milli_units_per_cubic_meter)]
pub struct MilliUnitPerCubicMeter;

/// Millionths per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µ/m³", dimension = VolumicNumberDim, ratio = 1e-6, accessor = micro_units_per_cubic_meter)]
pub struct MicroUnitPerCubicMeter;

/// Per litre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/L", dimension = VolumicNumberDim, ratio = 1e3, accessor = units_per_liter)]
pub struct UnitPerLiter;

/// Per cubic decimetre, the same as per litre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/dm³", dimension = VolumicNumberDim, ratio = 1e3, accessor = units_per_cubic_decimeter)]
pub struct UnitPerCubicDecimeter;

/// Per cubic centimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/cm³", dimension = VolumicNumberDim, ratio = 1e6, accessor = units_per_cubic_centimeter)]
pub struct UnitPerCubicCentimeter;

/// Per cubic millimetre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/mm³", dimension = VolumicNumberDim, ratio = 1e9, accessor = units_per_cubic_millimeter)]
pub struct UnitPerCubicMillimeter;

/// Per cubic kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/km³", dimension = VolumicNumberDim, ratio = 1e-9, accessor = units_per_cubic_kilometer)]
pub struct UnitPerCubicKilometer;

/// Per cubic inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/in³", dimension = VolumicNumberDim, ratio = 1.0 / 1.638_706_4e-5, accessor = units_per_cubic_inch)]
pub struct UnitPerCubicInch;

/// Per cubic foot.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/ft³", dimension = VolumicNumberDim, ratio = 1.0 / 0.028_316_846_592, accessor = units_per_cubic_foot)]
pub struct UnitPerCubicFoot;

/// Per cubic yard.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "/yd³", dimension = VolumicNumberDim, ratio = 1.0 / 0.764_554_857_984, accessor = units_per_cubic_yard)]
pub struct UnitPerCubicYard;
