//! Extern "C" API for FFI consumers.
//!
//! These `#[no_mangle]` functions form the stable C ABI of `siqty-ffi`.
//!
//! # Safety
//!
//! Every function here catches panics and reports them as a status code, and checks output pointers for null
//! before writing through them.
//!
//! # Status Codes
//!
//! - `SIQTY_OK` (0): Success
//! - `SIQTY_ERR_UNKNOWN_UNIT` (-1): Invalid or unrecognized unit ID
//! - `SIQTY_ERR_INCOMPATIBLE_DIM` (-2): Units have different dimensions
//! - `SIQTY_ERR_NULL_OUT` (-3): Required output pointer was null
//! - `SIQTY_ERR_INVALID_VALUE` (-4): Invalid value (reserved)
//! - `SIQTY_ERR_TRUNCATED` (-5): Output buffer too small; it holds a NUL-terminated prefix
//! - `SIQTY_ERR_INVALID_LABEL` (-6): Unit label was null or not UTF-8

use crate::registry;
use crate::types::{
    DimensionId, SiqtyQuantity, TemperatureUnitId, UnitId, SIQTY_ERR_INVALID_LABEL, SIQTY_ERR_NULL_OUT,
    SIQTY_ERR_TRUNCATED, SIQTY_ERR_UNKNOWN_UNIT, SIQTY_OK,
};
use core::ffi::{c_char, CStr};
use core::fmt;
use siqty::format::write_truncated;
use siqty::{FormatOptions, Temperature};

// =============================================================================
// Unit Validation / Info Functions
// =============================================================================

/// Checks if a unit ID is valid (recognized by the registry).
///
/// # Safety
///
/// This function is safe to call from any context.
#[no_mangle]
pub extern "C" fn siqty_unit_is_valid(unit: UnitId) -> bool {
    catch_panic!(false, registry::meta(unit).is_some())
}

/// Gets the dimension of a unit.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if the unit is not recognized
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `DimensionId`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn siqty_unit_dimension(unit: UnitId, out: *mut DimensionId) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        match registry::dimension(unit) {
            Some(dim) => {
                // SAFETY: We checked that `out` is not null
                unsafe { *out = dim };
                SIQTY_OK
            }
            None => SIQTY_ERR_UNKNOWN_UNIT,
        }
    })
}

/// Checks if two units are compatible (same dimension).
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if either unit is not recognized
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `bool`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn siqty_units_compatible(a: UnitId, b: UnitId, out: *mut bool) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        if registry::meta(a).is_none() || registry::meta(b).is_none() {
            return SIQTY_ERR_UNKNOWN_UNIT;
        }

        // SAFETY: We checked that `out` is not null
        unsafe { *out = registry::compatible(a, b) };
        SIQTY_OK
    })
}

/// Gets the variant name of a unit as a NUL-terminated C string, e.g. `"Kilometer"`.
///
/// Returns a null pointer if the unit is not recognized.
///
/// # Safety
///
/// The returned pointer has static lifetime and must not be freed by the caller.
#[no_mangle]
pub extern "C" fn siqty_unit_name(unit: UnitId) -> *const c_char {
    catch_panic!(core::ptr::null(), {
        match registry::meta(unit) {
            Some(_) => unit.name_cstr(),
            None => core::ptr::null(),
        }
    })
}

/// Gets the printed symbol of a unit as a NUL-terminated UTF-8 C string, e.g. `"km"` or `"µF"`.
///
/// Returns a null pointer if the unit is not recognized.
///
/// # Safety
///
/// The returned pointer has static lifetime and must not be freed by the caller.
#[no_mangle]
pub extern "C" fn siqty_unit_symbol(unit: UnitId) -> *const c_char {
    catch_panic!(core::ptr::null(), {
        match registry::meta(unit) {
            Some(_) => unit.symbol_cstr(),
            None => core::ptr::null(),
        }
    })
}

// =============================================================================
// Quantity Construction and Conversion Functions
// =============================================================================

/// Creates a new quantity with the given value and unit.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if the unit is not recognized
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `SiqtyQuantity`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn siqty_quantity_make(value: f32, unit: UnitId, out: *mut SiqtyQuantity) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        if registry::meta(unit).is_none() {
            return SIQTY_ERR_UNKNOWN_UNIT;
        }

        // SAFETY: We checked that `out` is not null
        unsafe { *out = SiqtyQuantity::new(value, unit) };
        SIQTY_OK
    })
}

/// Converts a quantity to a different unit of the same dimension.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if either unit is not recognized
/// * `SIQTY_ERR_INCOMPATIBLE_DIM` if the units have different dimensions
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `SiqtyQuantity`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn siqty_quantity_convert(
    src: SiqtyQuantity,
    dst_unit: UnitId,
    out: *mut SiqtyQuantity,
) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        match registry::convert_value(src.value, src.unit, dst_unit) {
            Ok(value) => {
                // SAFETY: We checked that `out` is not null
                unsafe { *out = SiqtyQuantity::new(value, dst_unit) };
                SIQTY_OK
            }
            Err(code) => code,
        }
    })
}

/// Converts a bare value between two units of the same dimension.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out_value` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if either unit is not recognized
/// * `SIQTY_ERR_INCOMPATIBLE_DIM` if the units have different dimensions
///
/// # Safety
///
/// The caller must ensure that `out_value` points to valid, writable memory for an `f32`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn siqty_quantity_convert_value(
    value: f32,
    src_unit: UnitId,
    dst_unit: UnitId,
    out_value: *mut f32,
) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out_value.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        match registry::convert_value(value, src_unit, dst_unit) {
            Ok(converted) => {
                // SAFETY: We checked that `out_value` is not null
                unsafe { *out_value = converted };
                SIQTY_OK
            }
            Err(code) => code,
        }
    })
}

// =============================================================================
// Formatting Functions
// =============================================================================

struct SiValue<'a> {
    value: f32,
    label: &'a str,
}

impl fmt::Display for SiValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        siqty::write_simple_si_value(f, self.value, self.label)
    }
}

/// Renders `value` into the caller's buffer, `snprintf`-style.
///
/// # Safety
///
/// `out` must be non-null and valid for writes of `len` bytes.
unsafe fn write_to_buffer<T: fmt::Display>(out: *mut c_char, len: usize, value: &T) -> i32 {
    // SAFETY: The caller guarantees `out` is valid for `len` bytes
    let buf = unsafe { core::slice::from_raw_parts_mut(out.cast::<u8>(), len) };
    let written = write_truncated(buf, value);
    if written.truncated {
        log::debug!("formatted value truncated to {} of {} buffer bytes", written.len, len);
        SIQTY_ERR_TRUNCATED
    } else {
        SIQTY_OK
    }
}

/// Formats `value` (in the base unit named by `label`) with an SI prefix, e.g. `1243.3, "V"` gives `"1.2433 kV"`.
///
/// The output is always NUL-terminated when `len > 0`.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_INVALID_LABEL` if `label` is null or not valid UTF-8
/// * `SIQTY_ERR_TRUNCATED` if the text did not fit; `out` holds the longest whole-character prefix that does
///
/// # Safety
///
/// `label` must be null or point to a NUL-terminated string. `out` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn siqty_format_si(value: f32, label: *const c_char, out: *mut c_char, len: usize) -> i32 {
    catch_panic!(SIQTY_ERR_NULL_OUT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }
        if label.is_null() {
            return SIQTY_ERR_INVALID_LABEL;
        }

        // SAFETY: We checked that `label` is not null; the caller guarantees NUL termination
        let label = match unsafe { CStr::from_ptr(label) }.to_str() {
            Ok(label) => label,
            Err(_) => return SIQTY_ERR_INVALID_LABEL,
        };

        // SAFETY: We checked that `out` is not null; the caller guarantees `len`
        unsafe { write_to_buffer(out, len, &SiValue { value, label }) }
    })
}

/// Formats a quantity the way the matching Rust type displays it, e.g. `1.5 km`, `3.3 V` or `250/m`.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_UNKNOWN_UNIT` if the unit is not recognized
/// * `SIQTY_ERR_TRUNCATED` if the text did not fit
///
/// # Safety
///
/// `out` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn siqty_quantity_format(qty: SiqtyQuantity, out: *mut c_char, len: usize) -> i32 {
    catch_panic!(SIQTY_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        match registry::styled(qty.value, qty.unit) {
            // SAFETY: We checked that `out` is not null; the caller guarantees `len`
            Ok(styled) => unsafe { write_to_buffer(out, len, &styled) },
            Err(code) => code,
        }
    })
}

/// Formats a temperature given in degrees Celsius on the chosen scale, e.g. `25°C`, `77°F` or `298.15K`.
///
/// NaN renders as `?` followed by the scale symbol.
///
/// # Returns
///
/// * `SIQTY_OK` on success
/// * `SIQTY_ERR_NULL_OUT` if `out` is null
/// * `SIQTY_ERR_TRUNCATED` if the text did not fit
///
/// # Safety
///
/// `out` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn siqty_temperature_format(
    celsius: f32,
    scale: TemperatureUnitId,
    out: *mut c_char,
    len: usize,
) -> i32 {
    catch_panic!(SIQTY_ERR_NULL_OUT, {
        if out.is_null() {
            return SIQTY_ERR_NULL_OUT;
        }

        let options = FormatOptions::default().with_temperature_unit(scale.into());
        let display = Temperature::from_celsius(celsius).display_with(&options);
        // SAFETY: We checked that `out` is not null; the caller guarantees `len`
        unsafe { write_to_buffer(out, len, &display) }
    })
}

// =============================================================================
// Version
// =============================================================================

/// Returns the ABI version of this library.
///
/// Bumped whenever a discriminant, struct layout or function signature changes incompatibly.
#[no_mangle]
pub extern "C" fn siqty_ffi_version() -> u32 {
    1
}
