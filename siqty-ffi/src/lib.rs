//! C-compatible FFI bindings for `siqty` quantities, unit conversions and formatting.
//!
//! `siqty-ffi` exposes a stable C ABI for `siqty`, so firmware written in C or C++ can convert between units and
//! print values exactly as the Rust types display them. It also provides conversions between the Rust quantity types
//! and [`SiqtyQuantity`] for downstream crates that build their own FFI surfaces.
//!
//! # Quick Start (C/C++)
//!
//! Include the generated header (`include/siqty_ffi.h`) and link against the library:
//!
//! ```c
//! #include "siqty_ffi.h"
//!
//! SiqtyQuantity current;
//! siqty_quantity_make(250.0f, UnitId_Milliampere, &current);
//!
//! char text[16];
//! if (siqty_quantity_format(current, text, sizeof text) == SIQTY_OK) {
//!     // text == "250 mA"
//! }
//!
//! siqty_format_si(1243.3f, "V", text, sizeof text); // "1.2433 kV"
//! ```
//!
//! # Quick Start (Rust)
//!
//! ```rust
//! use siqty::Length;
//! use siqty_ffi::{SiqtyQuantity, UnitId};
//!
//! let ffi_qty: SiqtyQuantity = Length::from_kilometers(1.5).into();
//! assert_eq!(ffi_qty.unit, UnitId::Meter);
//!
//! let back: Length = ffi_qty.try_into().unwrap();
//! assert_eq!(back.to_string(), "1.5 km");
//! ```
//!
//! # ABI Stability
//!
//! The following are part of the ABI contract:
//!
//! - [`UnitId`] and [`DimensionId`] discriminant values (existing variants)
//! - [`SiqtyQuantity`] memory layout (`f32` value followed by a `u32` unit, 8 bytes)
//! - Status code values ([`SIQTY_OK`], [`SIQTY_ERR_UNKNOWN_UNIT`], etc.)
//! - Signatures of the exported `extern "C"` functions
//!
//! New units and functions may be added; existing ones stay put. [`siqty_ffi_version`] reports the ABI revision.
//!
//! # Error Handling
//!
//! All fallible functions return a status code:
//!
//! - [`SIQTY_OK`] (0): Success
//! - [`SIQTY_ERR_UNKNOWN_UNIT`] (-1): Invalid unit ID
//! - [`SIQTY_ERR_INCOMPATIBLE_DIM`] (-2): Dimension mismatch
//! - [`SIQTY_ERR_NULL_OUT`] (-3): Null output pointer
//! - [`SIQTY_ERR_INVALID_VALUE`] (-4): Invalid value (reserved)
//! - [`SIQTY_ERR_TRUNCATED`] (-5): Output buffer too small
//! - [`SIQTY_ERR_INVALID_LABEL`] (-6): Null or non-UTF-8 unit label
//!
//! # Thread Safety
//!
//! All functions are thread-safe. The library contains no global mutable state.

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

#[macro_use]
pub mod macros;
mod ffi;
pub mod helpers;
pub mod registry;
mod types;

pub use ffi::{
    siqty_ffi_version, siqty_format_si, siqty_quantity_convert, siqty_quantity_convert_value, siqty_quantity_format,
    siqty_quantity_make, siqty_temperature_format, siqty_unit_dimension, siqty_unit_is_valid, siqty_unit_name,
    siqty_unit_symbol, siqty_units_compatible,
};

pub use types::{
    DimensionId, SiqtyQuantity, TemperatureUnitId, UnitId, SIQTY_ERR_INCOMPATIBLE_DIM, SIQTY_ERR_INVALID_LABEL,
    SIQTY_ERR_INVALID_VALUE, SIQTY_ERR_NULL_OUT, SIQTY_ERR_TRUNCATED, SIQTY_ERR_UNKNOWN_UNIT, SIQTY_OK,
};
