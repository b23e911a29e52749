//! Macros for implementing FFI conversions for `siqty` quantity types.
//!
//! `siqty-ffi` already implements these for every predefined quantity (see [`helpers`](crate::helpers)). You only
//! need the macro for quantity types defined in your own crate:
//!
//! ```rust,ignore
//! use siqty_ffi::{impl_quantity_ffi, UnitId};
//!
//! impl_quantity_ffi!(my_crate::Distance, my_crate::Meter, UnitId::Meter);
//! ```

/// Implements `From<$qty_type>` for `SiqtyQuantity` and `TryFrom<SiqtyQuantity>` for `$qty_type`.
///
/// # Arguments
///
/// * `$qty_type` - The quantity type (e.g., `siqty::Length`)
/// * `$unit` - A unit marker of that quantity's dimension (e.g., `siqty::Meter`)
/// * `$unit_id` - The [`UnitId`](crate::UnitId) matching `$unit` (e.g., `UnitId::Meter`)
///
/// # Generated Implementations
///
/// * `impl From<$qty_type> for SiqtyQuantity` - expresses the quantity in `$unit`
/// * `impl TryFrom<SiqtyQuantity> for $qty_type` - accepts any unit of the same dimension, converting through the
///   registry; fails with `SIQTY_ERR_INCOMPATIBLE_DIM` otherwise
#[macro_export]
macro_rules! impl_quantity_ffi {
    ($qty_type:ty, $unit:ty, $unit_id:expr) => {
        impl From<$qty_type> for $crate::SiqtyQuantity {
            #[inline]
            fn from(qty: $qty_type) -> Self {
                $crate::SiqtyQuantity::new(qty.in_unit::<$unit>(), $unit_id)
            }
        }

        impl core::convert::TryFrom<$crate::SiqtyQuantity> for $qty_type {
            type Error = i32;

            #[inline]
            fn try_from(qty: $crate::SiqtyQuantity) -> Result<Self, Self::Error> {
                let value = $crate::registry::convert_value(qty.value, qty.unit, $unit_id)?;
                Ok(<$qty_type>::from_unit::<$unit>(value))
            }
        }
    };
}

/// Catches any panic and returns `$default` instead of unwinding across FFI.
macro_rules! catch_panic {
    ($default:expr, $body:expr) => {{
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => $default,
        }
    }};
}
