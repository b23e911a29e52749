//! Unit registry, conversion and formatting logic for FFI.
//!
//! Maps [`UnitId`] values to their metadata (dimension, scale to the dimension's base unit, name, symbol) and
//! [`DimensionId`] values to the display style of the matching `siqty` quantity type.
//!
//! # Conversion Formula
//!
//! Every dimension has one base unit (metre, pascal, ampere, …). Conversions go through it in `f64` and are rounded
//! to `f32` once:
//!
//! ```text
//! v_dst = v_src * (src.scale_to_base / dst.scale_to_base)
//! ```

use crate::types::{DimensionId, UnitId, SIQTY_ERR_INCOMPATIBLE_DIM, SIQTY_ERR_UNKNOWN_UNIT, SIQTY_OK};
use core::fmt;
use siqty::format::write_styled;
use siqty::DisplayStyle;

// =============================================================================
// Unit Metadata
// =============================================================================

/// Metadata about a unit for internal registry use.
///
/// This struct is Rust-only and not exposed via FFI.
#[derive(Debug, Clone, Copy)]
pub struct UnitMeta {
    /// The dimension this unit belongs to.
    pub dim: DimensionId,
    /// Base units of the dimension per one of this unit.
    ///
    /// For example, for Kilometer: `scale_to_base = 1000.0` (1 km = 1000 m)
    pub scale_to_base: f64,
    /// Variant name of the unit.
    pub name: &'static str,
    /// Printed symbol of the unit.
    pub symbol: &'static str,
}

// =============================================================================
// Registry Functions
// =============================================================================

/// Returns metadata for the given unit ID.
///
/// Returns `None` if the unit ID is not recognized.
#[inline]
pub fn meta(id: UnitId) -> Option<UnitMeta> {
    include!(concat!(env!("OUT_DIR"), "/unit_registry.rs"))
}

/// Returns the dimension for the given unit ID.
#[inline]
pub fn dimension(id: UnitId) -> Option<DimensionId> {
    meta(id).map(|m| m.dim)
}

/// Checks if two units are compatible (same dimension).
///
/// Also returns `false` if either unit is not recognized.
#[inline]
pub fn compatible(a: UnitId, b: UnitId) -> bool {
    match (dimension(a), dimension(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}

/// Returns how values of `dim` are rendered, identical to the `Display` of the matching `siqty` type.
pub fn style(dim: DimensionId) -> DisplayStyle {
    include!(concat!(env!("OUT_DIR"), "/dimension_styles.rs"))
}

/// Converts a value from one unit to another.
///
/// # Returns
///
/// * `Ok(converted_value)` on success
/// * `Err(SIQTY_ERR_UNKNOWN_UNIT)` if either unit is not recognized
/// * `Err(SIQTY_ERR_INCOMPATIBLE_DIM)` if units have different dimensions
///
/// # Example
///
/// ```rust
/// use siqty_ffi::{registry, UnitId};
///
/// let km = registry::convert_value(1500.0, UnitId::Meter, UnitId::Kilometer);
/// assert_eq!(km, Ok(1.5));
/// ```
#[inline]
pub fn convert_value(v: f32, src: UnitId, dst: UnitId) -> Result<f32, i32> {
    let src_meta = meta(src).ok_or(SIQTY_ERR_UNKNOWN_UNIT)?;
    let dst_meta = meta(dst).ok_or(SIQTY_ERR_UNKNOWN_UNIT)?;

    if src_meta.dim != dst_meta.dim {
        return Err(SIQTY_ERR_INCOMPATIBLE_DIM);
    }

    if src == dst {
        return Ok(v);
    }

    let v_base = f64::from(v) * src_meta.scale_to_base;
    Ok((v_base / dst_meta.scale_to_base) as f32)
}

/// Converts a value from one unit to another, returning a status code.
///
/// The converted value is stored in `result` only on success.
#[inline]
pub fn convert_value_status(v: f32, src: UnitId, dst: UnitId, result: &mut f32) -> i32 {
    match convert_value(v, src, dst) {
        Ok(converted) => {
            *result = converted;
            SIQTY_OK
        }
        Err(code) => code,
    }
}

/// Returns the value of `v` (in `unit`) in the base unit of its dimension, along with that dimension.
#[inline]
pub fn to_base(v: f32, unit: UnitId) -> Result<(f32, DimensionId), i32> {
    let m = meta(unit).ok_or(SIQTY_ERR_UNKNOWN_UNIT)?;
    Ok(((f64::from(v) * m.scale_to_base) as f32, m.dim))
}

// =============================================================================
// Formatting
// =============================================================================

/// A base-unit magnitude rendered with a runtime-selected [`DisplayStyle`].
#[derive(Debug, Clone, Copy)]
pub struct Styled {
    /// Magnitude in the dimension's base unit.
    pub value: f32,
    /// Rendering rule.
    pub style: DisplayStyle,
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_styled(f, self.value, &self.style)
    }
}

/// Prepares `v` (in `unit`) for rendering in the style of its dimension.
pub fn styled(v: f32, unit: UnitId) -> Result<Styled, i32> {
    let (value, dim) = to_base(v, unit)?;
    Ok(Styled {
        value,
        style: style(dim),
    })
}
