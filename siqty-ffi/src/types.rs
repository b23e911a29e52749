//! ABI-stable types shared with C callers.
//!
//! [`UnitId`] and [`DimensionId`] are generated from `units.csv` at build time; their discriminants are part of the
//! ABI contract.

use core::ffi::c_char;

include!(concat!(env!("OUT_DIR"), "/ids.rs"));

// =============================================================================
// Status codes
// =============================================================================

/// Success.
pub const SIQTY_OK: i32 = 0;
/// The unit ID is not recognized.
pub const SIQTY_ERR_UNKNOWN_UNIT: i32 = -1;
/// The units belong to different dimensions.
pub const SIQTY_ERR_INCOMPATIBLE_DIM: i32 = -2;
/// A required output pointer was null.
pub const SIQTY_ERR_NULL_OUT: i32 = -3;
/// An input value was rejected (reserved; no current entry point rejects values).
pub const SIQTY_ERR_INVALID_VALUE: i32 = -4;
/// The output buffer was too small; it holds a NUL-terminated prefix of the text.
pub const SIQTY_ERR_TRUNCATED: i32 = -5;
/// A unit label was null or not valid UTF-8.
pub const SIQTY_ERR_INVALID_LABEL: i32 = -6;

// =============================================================================
// UnitId helpers
// =============================================================================

impl UnitId {
    /// Returns the unit's variant name, e.g. `"Kilometer"`.
    pub const fn name(self) -> &'static str {
        include!(concat!(env!("OUT_DIR"), "/unit_names.rs"))
    }

    /// Returns the unit's printed symbol, e.g. `"km"`.
    pub const fn symbol(self) -> &'static str {
        include!(concat!(env!("OUT_DIR"), "/unit_symbols.rs"))
    }

    /// Returns the unit's variant name as a static NUL-terminated C string.
    pub const fn name_cstr(self) -> *const c_char {
        include!(concat!(env!("OUT_DIR"), "/unit_names_cstr.rs"))
    }

    /// Returns the unit's symbol as a static NUL-terminated UTF-8 C string.
    pub const fn symbol_cstr(self) -> *const c_char {
        include!(concat!(env!("OUT_DIR"), "/unit_symbols_cstr.rs"))
    }

    /// Looks up a unit by its ABI discriminant.
    pub const fn from_u32(value: u32) -> Option<Self> {
        include!(concat!(env!("OUT_DIR"), "/unit_from_u32.rs"))
    }
}

// =============================================================================
// Temperature scale
// =============================================================================

/// Temperature scale selector for [`siqty_temperature_format`](crate::siqty_temperature_format).
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TemperatureUnitId {
    /// Degrees Celsius.
    Celsius = 0,
    /// Kelvin.
    Kelvin = 1,
    /// Degrees Fahrenheit.
    Fahrenheit = 2,
}

impl From<TemperatureUnitId> for siqty::TemperatureUnit {
    fn from(id: TemperatureUnitId) -> Self {
        match id {
            TemperatureUnitId::Celsius => siqty::TemperatureUnit::Celsius,
            TemperatureUnitId::Kelvin => siqty::TemperatureUnit::Kelvin,
            TemperatureUnitId::Fahrenheit => siqty::TemperatureUnit::Fahrenheit,
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A magnitude tagged with its unit, laid out for C.
///
/// Unlike the Rust-side quantities, `value` is expressed in `unit`, not in the dimension's base unit.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SiqtyQuantity {
    /// Magnitude in `unit`. NaN is the unknown value.
    pub value: f32,
    /// Unit of `value`.
    pub unit: UnitId,
}

impl SiqtyQuantity {
    /// Creates a quantity from a value in `unit`.
    #[inline]
    pub const fn new(value: f32, unit: UnitId) -> Self {
        Self { value, unit }
    }
}

impl Default for SiqtyQuantity {
    /// Zero metres.
    fn default() -> Self {
        Self::new(0.0, UnitId::Meter)
    }
}
