//! Quantity type and its implementations.

use crate::dimension::{Dimension, Reciprocal};
use crate::format::{self, ShortString, Written};
use crate::unit::Unit;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical quantity of dimension `D`.
///
/// `Quantity<D>` wraps a single `f32` holding the magnitude in the base unit of `D` (metres for length, pascals for
/// pressure, …) together with phantom type information about the dimension. Values in any other unit go through the
/// named constructors and accessors generated for each unit (`from_kilometers`, `in_feet`, …) or through the generic
/// [`Quantity::from_unit`] and [`Quantity::in_unit`].
///
/// A NaN magnitude is the *unknown* value. It is what [`Default`] returns, it propagates through arithmetic, and it
/// compares false against everything, itself included. Infinity is a distinct state that [`Quantity::is_unknown`]
/// does not flag.
///
/// # Examples
///
/// ```rust
/// use siqty_core::length::Length;
///
/// let x = Length::from_meters(5.0);
/// let y = Length::from_centimeters(300.0);
/// assert_eq!((x + y).in_meters(), 8.0);
/// assert_eq!((x + y).to_string(), "8 m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<D: Dimension>(f32, PhantomData<D>);

impl<D: Dimension> Quantity<D> {
    /// The unknown value (NaN).
    ///
    /// ```rust
    /// use siqty_core::length::Length;
    /// assert!(Length::UNKNOWN.is_unknown());
    /// ```
    pub const UNKNOWN: Self = Self::from_base(f32::NAN);

    /// Zero in any unit.
    pub const ZERO: Self = Self::from_base(0.0);

    /// Creates a quantity from a magnitude already expressed in the base unit.
    #[inline]
    pub(crate) const fn from_base(value: f32) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the magnitude in the base unit.
    #[inline]
    pub(crate) const fn base(self) -> f32 {
        self.0
    }

    /// Creates a quantity from a value expressed in unit `U`.
    ///
    /// The scaling is computed in `f64` and rounded once to `f32`.
    ///
    /// ```rust
    /// use siqty_core::length::{Kilometer, Length};
    /// let d = Length::from_unit::<Kilometer>(1.5);
    /// assert_eq!(d.in_meters(), 1500.0);
    /// ```
    #[inline]
    pub const fn from_unit<U: Unit<Dim = D>>(value: f32) -> Self {
        Self::from_base((value as f64 * U::RATIO) as f32)
    }

    /// Returns the value expressed in unit `U`.
    ///
    /// ```rust
    /// use siqty_core::mass::{Mass, Pound};
    /// let m = Mass::from_kilograms(0.45359237);
    /// assert!((m.in_unit::<Pound>() - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub const fn in_unit<U: Unit<Dim = D>>(self) -> f32 {
        (self.0 as f64 / U::RATIO) as f32
    }

    /// Returns `true` if this is the unknown value.
    ///
    /// Only NaN counts as unknown; an infinite magnitude (e.g. from a division by zero) does not.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }

    /// Returns `true` if the magnitude is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use siqty_core::voltage::Voltage;
    /// assert_eq!(Voltage::from_volts(-3.0).abs(), Voltage::from_volts(3.0));
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_base(self.0.abs())
    }

    /// Returns the smaller of two quantities, ignoring an unknown operand.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_base(self.0.min(other.0))
    }

    /// Returns the larger of two quantities, ignoring an unknown operand.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_base(self.0.max(other.0))
    }

    /// Returns `1 / self` as the reciprocal dimension `R`.
    ///
    /// ```rust
    /// use siqty_core::area::Area;
    /// use siqty_core::surface_number_density::SurfaceNumberDensityDim;
    ///
    /// let per_area = Area::from_square_meters(4.0).recip::<SurfaceNumberDensityDim>();
    /// assert_eq!(per_area.in_units_per_square_meter(), 0.25);
    /// ```
    #[inline]
    pub fn recip<R: Dimension>(self) -> Quantity<R>
    where
        D: Reciprocal<R>,
    {
        Quantity::from_base(1.0 / self.0)
    }

    /// Renders this quantity into an owned string, exactly like its [`fmt::Display`] output.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Renders this quantity on the stack, cut to at most 15 bytes on a character boundary.
    ///
    /// ```rust
    /// use siqty_core::current::Current;
    /// assert_eq!(Current::from_amperes(0.032).as_short_string(), "32 mA");
    /// ```
    pub fn as_short_string(&self) -> ShortString {
        ShortString::new(self)
    }

    /// Renders this quantity into a fixed-size byte buffer, truncating on a character boundary and always leaving
    /// room for a trailing NUL.
    ///
    /// ```rust
    /// use siqty_core::length::Length;
    ///
    /// let mut buf = [0u8; 16];
    /// let written = Length::from_millimeters(15.5).write_bounded(&mut buf);
    /// assert_eq!(written.as_str(&buf), "15.5 mm");
    /// assert!(!written.truncated);
    /// ```
    pub fn write_bounded(&self, buf: &mut [u8]) -> Written {
        format::write_truncated(buf, self)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_styled(f, self.0, &D::STYLE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.0)
    }
}

impl<D: Dimension> Mul<f32> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_base(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f32 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f32> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> Div<f32> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_base(self.0 / rhs)
    }
}

impl<D: Dimension> DivAssign<f32> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.0 /= rhs;
    }
}

/// The ratio of two quantities of the same dimension is a plain number.
impl<D: Dimension> Div for Quantity<D> {
    type Output = f32;
    #[inline]
    fn div(self, rhs: Self) -> f32 {
        self.0 / rhs.0
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        Ok(Quantity::from_base(value))
    }
}

/// Serde helper module for serializing quantities together with their base unit symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute to make serialized data self-describing.
///
/// # Examples
///
/// ```rust
/// use siqty_core::pressure::Pressure;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Limits {
///     #[serde(with = "siqty_core::serde_with_unit")]
///     max_pressure: Pressure,  // Serializes as {"value": 200000.0, "unit": "Pa"}
///
///     min_pressure: Pressure,  // Serializes as 1000.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<D>` as a struct with `value` and `unit` fields.
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.base())?;
        state.serialize_field("unit", D::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field, when present, must equal the base unit symbol of `D`.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D>(PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f32> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref unit_str) = unit {
                    if unit_str != D::SYMBOL {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            D::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Quantity::from_base(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
