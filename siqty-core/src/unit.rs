//! Unit types and traits.

use crate::dimension::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *base unit* of the same dimension.
///   Example: metres are the base unit of length (`Meter::RATIO == 1.0`), so kilometres use
///   `Kilometer::RATIO == 1000.0` because `1 km = 1000 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// Units are normally declared with `#[derive(Unit)]`, which also generates the `from_*` / `in_*` pair on
/// [`Quantity<Dim>`](crate::Quantity).
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-base conversion factor.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol.
    const SYMBOL: &'static str;
}
