//! Dimension types and traits.

use crate::format::DisplayStyle;
use core::fmt::Debug;

/// Marker trait for **dimensions** (Length, Time, Voltage …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Every dimension has exactly one base unit
/// (the unit a [`Quantity`](crate::Quantity) stores its value in) and a [`DisplayStyle`] that decides how values are
/// rendered by [`core::fmt::Display`].
///
/// You usually model each dimension as an empty enum:
///
/// ```rust
/// use siqty_core::{Dimension, DisplayStyle};
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Illuminance {}
/// impl Dimension for Illuminance {
///     const SYMBOL: &'static str = "lx";
///     const STYLE: DisplayStyle = DisplayStyle::Si { unit: "lx" };
/// }
/// ```
pub trait Dimension: Copy + PartialEq + PartialOrd + Debug + 'static {
    /// Symbol of the base unit.
    const SYMBOL: &'static str;

    /// How values of this dimension are rendered.
    const STYLE: DisplayStyle;
}

/// Marks `Self` as the reciprocal of dimension `R` (for example, lineic numbers are "per length").
///
/// Used by [`Quantity::recip`](crate::Quantity::recip) to reach reciprocal types that `f32 / Quantity` cannot name
/// unambiguously.
pub trait Reciprocal<R: Dimension>: Dimension {}
