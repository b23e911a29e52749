//! Macros for the cross-quantity operators and the shared per-length unit sets.

/// Declares one prefixed unit of an SI-formatted dimension.
macro_rules! si_unit {
    ($dim:ident, $name:ident, $sym:literal, $ratio:expr, $accessor:ident) => {
        #[doc = concat!("`", $sym, "` (", stringify!($ratio), " base units).")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = $sym, dimension = $dim, ratio = $ratio, accessor = $accessor)]
        pub struct $name;
    };
}

/// Implements `A * B -> Out` in both operand orders, or `A * A -> Out` with the `square` form.
macro_rules! impl_product {
    (square $dim:ty => $out:ty) => {
        impl_product!(@mul $dim, $dim => $out);
    };
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl_product!(@mul $lhs, $rhs => $out);
        impl_product!(@mul $rhs, $lhs => $out);
    };
    (@mul $lhs:ty, $rhs:ty => $out:ty) => {
        impl core::ops::Mul<$crate::Quantity<$rhs>> for $crate::Quantity<$lhs> {
            type Output = $crate::Quantity<$out>;
            #[inline]
            fn mul(self, rhs: $crate::Quantity<$rhs>) -> Self::Output {
                $crate::Quantity::from_base(self.base() * rhs.base())
            }
        }
    };
}

/// Implements `A / B -> Out`.
macro_rules! impl_quotient {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl core::ops::Div<$crate::Quantity<$rhs>> for $crate::Quantity<$lhs> {
            type Output = $crate::Quantity<$out>;
            #[inline]
            fn div(self, rhs: $crate::Quantity<$rhs>) -> Self::Output {
                $crate::Quantity::from_base(self.base() / rhs.base())
            }
        }
    };
}

/// Implements `f32 / A -> Out`.
///
/// `f32` can divide by a given quantity type only once, so each base dimension names a single inverse here; the
/// other reciprocal dimensions are reached through [`Quantity::recip`](crate::Quantity::recip).
macro_rules! impl_inverse {
    ($dim:ty => $out:ty) => {
        impl core::ops::Div<$crate::Quantity<$dim>> for f32 {
            type Output = $crate::Quantity<$out>;
            #[inline]
            fn div(self, rhs: $crate::Quantity<$dim>) -> Self::Output {
                $crate::Quantity::from_base(self / rhs.base())
            }
        }
    };
}

/// Declares `A` and `R` reciprocal: `A * R` and `R * A` are plain numbers, `f32 / R` is an `A`, and
/// [`Quantity::recip`](crate::Quantity::recip) works in both directions.
macro_rules! impl_reciprocal {
    ($dim:ty, $recip:ty) => {
        impl $crate::Reciprocal<$recip> for $dim {}
        impl $crate::Reciprocal<$dim> for $recip {}

        impl core::ops::Mul<$crate::Quantity<$recip>> for $crate::Quantity<$dim> {
            type Output = f32;
            #[inline]
            fn mul(self, rhs: $crate::Quantity<$recip>) -> f32 {
                self.base() * rhs.base()
            }
        }

        impl core::ops::Mul<$crate::Quantity<$dim>> for $crate::Quantity<$recip> {
            type Output = f32;
            #[inline]
            fn mul(self, rhs: $crate::Quantity<$dim>) -> f32 {
                self.base() * rhs.base()
            }
        }

        impl_inverse!($recip => $dim);
    };
}

/// Declares the shared "count per metre" unit set on a dimension.
macro_rules! per_meter_units {
    ($dim:ident) => {
        /// Billions per metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "G/m", dimension = $dim, ratio = 1e9, accessor = giga_units_per_meter)]
        pub struct GigaUnitPerMeter;

        /// Millions per metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "M/m", dimension = $dim, ratio = 1e6, accessor = mega_units_per_meter)]
        pub struct MegaUnitPerMeter;

        /// Thousands per metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "k/m", dimension = $dim, ratio = 1e3, accessor = kilo_units_per_meter)]
        pub struct KiloUnitPerMeter;

        /// Per metre (base unit).
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/m", dimension = $dim, ratio = 1.0, accessor = units_per_meter)]
        pub struct UnitPerMeter;

        /// Thousandths per metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "m/m", dimension = $dim, ratio = 1e-3, accessor = milli_units_per_meter)]
        pub struct MilliUnitPerMeter;

        /// Millionths per metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "µ/m", dimension = $dim, ratio = 1e-6, accessor = micro_units_per_meter)]
        pub struct MicroUnitPerMeter;

        /// Per centimetre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/cm", dimension = $dim, ratio = 100.0, accessor = units_per_centimeter)]
        pub struct UnitPerCentimeter;

        /// Per millimetre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/mm", dimension = $dim, ratio = 1e3, accessor = units_per_millimeter)]
        pub struct UnitPerMillimeter;

        /// Per kilometre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/km", dimension = $dim, ratio = 1e-3, accessor = units_per_kilometer)]
        pub struct UnitPerKilometer;

        /// Per international inch.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/in", dimension = $dim, ratio = 1.0 / 0.0254, accessor = units_per_inch)]
        pub struct UnitPerInch;

        /// Per international foot.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/ft", dimension = $dim, ratio = 1.0 / 0.3048, accessor = units_per_foot)]
        pub struct UnitPerFoot;

        /// Per international yard.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/yd", dimension = $dim, ratio = 1.0 / 0.9144, accessor = units_per_yard)]
        pub struct UnitPerYard;
    };
}

/// Declares the shared "count per square metre" unit set on a dimension.
macro_rules! per_square_meter_units {
    ($dim:ident) => {
        /// Billions per square metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "G/m²", dimension = $dim, ratio = 1e9, accessor = giga_units_per_square_meter)]
        pub struct GigaUnitPerSquareMeter;

        /// Millions per square metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "M/m²", dimension = $dim, ratio = 1e6, accessor = mega_units_per_square_meter)]
        pub struct MegaUnitPerSquareMeter;

        /// Thousands per square metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "k/m²", dimension = $dim, ratio = 1e3, accessor = kilo_units_per_square_meter)]
        pub struct KiloUnitPerSquareMeter;

        /// Per square metre (base unit).
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/m²", dimension = $dim, ratio = 1.0, accessor = units_per_square_meter)]
        pub struct UnitPerSquareMeter;

        /// Thousandths per square metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "m/m²", dimension = $dim, ratio = 1e-3, accessor = milli_units_per_square_meter)]
        pub struct MilliUnitPerSquareMeter;

        /// Millionths per square metre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "µ/m²", dimension = $dim, ratio = 1e-6, accessor = micro_units_per_square_meter)]
        pub struct MicroUnitPerSquareMeter;

        /// Per square centimetre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/cm²", dimension = $dim, ratio = 1e4, accessor = units_per_square_centimeter)]
        pub struct UnitPerSquareCentimeter;

        /// Per square millimetre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/mm²", dimension = $dim, ratio = 1e6, accessor = units_per_square_millimeter)]
        pub struct UnitPerSquareMillimeter;

        /// Per square kilometre.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/km²", dimension = $dim, ratio = 1e-6, accessor = units_per_square_kilometer)]
        pub struct UnitPerSquareKilometer;

        /// Per square inch.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/in²", dimension = $dim, ratio = 1.0 / 0.00064516, accessor = units_per_square_inch)]
        pub struct UnitPerSquareInch;

        /// Per square foot.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/ft²", dimension = $dim, ratio = 1.0 / 0.09290304, accessor = units_per_square_foot)]
        pub struct UnitPerSquareFoot;

        /// Per square yard.
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, siqty_derive::Unit)]
        #[unit(symbol = "/yd²", dimension = $dim, ratio = 1.0 / 0.83612736, accessor = units_per_square_yard)]
        pub struct UnitPerSquareYard;
    };
}
