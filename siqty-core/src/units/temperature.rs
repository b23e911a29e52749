//! Temperature.
//!
//! Absolute temperatures and temperature differences are separate types because their scales disagree on the zero
//! point but not on the step size:
//!
//! - [`Temperature`] is an absolute reading stored in degrees Celsius. Converting to Kelvin or Fahrenheit applies the
//!   scale offset.
//! - [`TemperatureDelta`] is a difference stored in Celsius-sized steps. Kelvin steps are identical, Fahrenheit steps
//!   are 1/1.8 as large, and no offset is ever applied.
//!
//! Subtracting two temperatures gives a delta; adding a delta to a temperature gives a temperature.
//!
//! ```rust
//! use siqty_core::temperature::{Temperature, TemperatureDelta};
//!
//! let morning = Temperature::from_celsius(12.0);
//! let noon = morning + TemperatureDelta::from_fahrenheit(18.0);
//! assert_eq!(noon.deg_celsius(), 22.0);
//! assert_eq!((noon - morning).deg_kelvin(), 10.0);
//! ```
//!
//! `Display` renders in Celsius. Use `display_with` to pick another scale:
//!
//! ```rust
//! use siqty_core::{FormatOptions, TemperatureUnit};
//! use siqty_core::temperature::Temperature;
//!
//! let t = Temperature::from_celsius(25.0);
//! assert_eq!(t.to_string(), "25°C");
//! let options = FormatOptions::default().with_temperature_unit(TemperatureUnit::Fahrenheit);
//! assert_eq!(t.display_with(&options).to_string(), "77°F");
//! ```

use crate::config::{FormatOptions, TemperatureUnit};
use crate::format::write_g;
use core::fmt;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const KELVIN_OFFSET: f32 = 273.15;
const FAHRENHEIT_OFFSET: f32 = 32.0;
const FAHRENHEIT_PER_CELSIUS: f32 = 1.8;

/// An absolute temperature, stored in degrees Celsius.
///
/// NaN is the unknown temperature, which is also the [`Default`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Temperature(f32);

impl Temperature {
    /// The unknown temperature (NaN).
    pub const UNKNOWN: Self = Self(f32::NAN);

    /// Creates a temperature from degrees Celsius.
    #[inline]
    pub const fn from_celsius(celsius: f32) -> Self {
        Self(celsius)
    }

    /// Creates a temperature from kelvins.
    #[inline]
    pub const fn from_kelvin(kelvin: f32) -> Self {
        Self(kelvin - KELVIN_OFFSET)
    }

    /// Creates a temperature from degrees Fahrenheit.
    #[inline]
    pub const fn from_fahrenheit(fahrenheit: f32) -> Self {
        Self((fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS)
    }

    /// Returns the temperature in degrees Celsius.
    #[inline]
    pub const fn deg_celsius(self) -> f32 {
        self.0
    }

    /// Returns the temperature in kelvins.
    #[inline]
    pub const fn deg_kelvin(self) -> f32 {
        self.0 + KELVIN_OFFSET
    }

    /// Returns the temperature in degrees Fahrenheit.
    #[inline]
    pub const fn deg_fahrenheit(self) -> f32 {
        self.0 * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_OFFSET
    }

    /// Returns the temperature on the given scale.
    pub const fn in_unit(self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.deg_celsius(),
            TemperatureUnit::Kelvin => self.deg_kelvin(),
            TemperatureUnit::Fahrenheit => self.deg_fahrenheit(),
        }
    }

    /// Returns `true` if this is the unknown temperature.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }

    /// Renders on the scale chosen by `options`.
    pub fn display_with(self, options: &FormatOptions) -> TemperatureDisplay {
        TemperatureDisplay {
            value: self.in_unit(options.temperature_unit),
            unit: options.temperature_unit,
        }
    }

    /// Renders into an owned string in degrees Celsius.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(&FormatOptions::default()).fmt(f)
    }
}

/// A temperature difference, stored in Celsius-sized (equivalently, kelvin-sized) steps.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TemperatureDelta(f32);

impl TemperatureDelta {
    /// The unknown difference (NaN).
    pub const UNKNOWN: Self = Self(f32::NAN);

    /// No difference.
    pub const ZERO: Self = Self(0.0);

    /// Creates a difference from Celsius degrees.
    #[inline]
    pub const fn from_celsius(celsius: f32) -> Self {
        Self(celsius)
    }

    /// Creates a difference from kelvins. A kelvin step equals a Celsius step.
    #[inline]
    pub const fn from_kelvin(kelvin: f32) -> Self {
        Self(kelvin)
    }

    /// Creates a difference from Fahrenheit degrees.
    #[inline]
    pub const fn from_fahrenheit(fahrenheit: f32) -> Self {
        Self(fahrenheit / FAHRENHEIT_PER_CELSIUS)
    }

    /// Returns the difference in Celsius degrees.
    #[inline]
    pub const fn deg_celsius(self) -> f32 {
        self.0
    }

    /// Returns the difference in kelvins.
    #[inline]
    pub const fn deg_kelvin(self) -> f32 {
        self.0
    }

    /// Returns the difference in Fahrenheit degrees.
    #[inline]
    pub const fn deg_fahrenheit(self) -> f32 {
        self.0 * FAHRENHEIT_PER_CELSIUS
    }

    /// Returns the difference on the given scale.
    pub const fn in_unit(self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.deg_celsius(),
            TemperatureUnit::Kelvin => self.deg_kelvin(),
            TemperatureUnit::Fahrenheit => self.deg_fahrenheit(),
        }
    }

    /// Returns `true` if this is the unknown difference.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }

    /// Renders on the scale chosen by `options`.
    pub fn display_with(self, options: &FormatOptions) -> TemperatureDisplay {
        TemperatureDisplay {
            value: self.in_unit(options.temperature_unit),
            unit: options.temperature_unit,
        }
    }

    /// Renders into an owned string in Celsius degrees.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl Default for TemperatureDelta {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(&FormatOptions::default()).fmt(f)
    }
}

/// [`fmt::Display`] adapter returned by [`Temperature::display_with`] and [`TemperatureDelta::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct TemperatureDisplay {
    value: f32,
    unit: TemperatureUnit,
}

impl fmt::Display for TemperatureDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_nan() {
            f.write_str("?")?;
        } else {
            write_g(f, f64::from(self.value))?;
        }
        f.write_str(self.unit.symbol())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl Add<TemperatureDelta> for Temperature {
    type Output = Temperature;
    #[inline]
    fn add(self, rhs: TemperatureDelta) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Add<Temperature> for TemperatureDelta {
    type Output = Temperature;
    #[inline]
    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub<TemperatureDelta> for Temperature {
    type Output = Temperature;
    #[inline]
    fn sub(self, rhs: TemperatureDelta) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Sub for Temperature {
    type Output = TemperatureDelta;
    #[inline]
    fn sub(self, rhs: Temperature) -> TemperatureDelta {
        TemperatureDelta(self.0 - rhs.0)
    }
}

impl AddAssign<TemperatureDelta> for Temperature {
    #[inline]
    fn add_assign(&mut self, rhs: TemperatureDelta) {
        self.0 += rhs.0;
    }
}

impl SubAssign<TemperatureDelta> for Temperature {
    #[inline]
    fn sub_assign(&mut self, rhs: TemperatureDelta) {
        self.0 -= rhs.0;
    }
}

impl Add for TemperatureDelta {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TemperatureDelta {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for TemperatureDelta {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for TemperatureDelta {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<TemperatureDelta> for f32 {
    type Output = TemperatureDelta;
    #[inline]
    fn mul(self, rhs: TemperatureDelta) -> TemperatureDelta {
        TemperatureDelta(self * rhs.0)
    }
}

impl Div<f32> for TemperatureDelta {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Div for TemperatureDelta {
    type Output = f32;
    #[inline]
    fn div(self, rhs: Self) -> f32 {
        self.0 / rhs.0
    }
}

impl AddAssign for TemperatureDelta {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for TemperatureDelta {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f32> for TemperatureDelta {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl DivAssign<f32> for TemperatureDelta {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.0 /= rhs;
    }
}
