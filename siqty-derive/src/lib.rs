//! Derive macro implementation used by `siqty-core`.
//!
//! `siqty-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`
//! and `crate::Quantity`, so it is intended to be used by `siqty-core` (or by crates that expose an identical
//! crate-root API).
//!
//! Most users should depend on `siqty` instead and use the predefined quantities.
//!
//! # Generated impls
//!
//! For a unit marker type `Kilometer` with `accessor = kilometers`, the derive implements:
//!
//! - `crate::Unit for Kilometer`
//! - `crate::Quantity<Dim>::from_kilometers(f32) -> Self`
//! - `crate::Quantity<Dim>::in_kilometers(self) -> f32`
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "km"`: displayed unit symbol
//! - `dimension = LengthDim`: dimension marker type
//! - `ratio = 1000.0`: how many base units one of this unit holds
//! - `accessor = kilometers` (optional): suffix of the generated `from_*` / `in_*` pair

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::meta::ParseNestedMeta;
use syn::{parse_macro_input, DeriveInput, Expr, Ident, LitStr, Type};

/// Derive `crate::Unit` and the named constructor/accessor pair on `crate::Quantity<Dim>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`, and
/// optionally `accessor`. Each key may appear once.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Keys of one `#[unit(...)]` attribute.
struct UnitArgs {
    symbol: LitStr,
    dimension: Type,
    ratio: Expr,
    accessor: Option<Ident>,
}

#[derive(Default)]
struct PartialArgs {
    symbol: Option<LitStr>,
    dimension: Option<Type>,
    ratio: Option<Expr>,
    accessor: Option<Ident>,
}

fn set_once<T>(slot: &mut Option<T>, meta: &ParseNestedMeta<'_>, value: T) -> syn::Result<()> {
    if slot.replace(value).is_some() {
        return Err(meta.error("duplicate key in #[unit(...)]"));
    }
    Ok(())
}

impl PartialArgs {
    fn accept(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("symbol") {
            let value = meta.value()?.parse()?;
            set_once(&mut self.symbol, &meta, value)
        } else if meta.path.is_ident("dimension") {
            let value = meta.value()?.parse()?;
            set_once(&mut self.dimension, &meta, value)
        } else if meta.path.is_ident("ratio") {
            let value = meta.value()?.parse()?;
            set_once(&mut self.ratio, &meta, value)
        } else if meta.path.is_ident("accessor") {
            let value = meta.value()?.parse()?;
            set_once(&mut self.accessor, &meta, value)
        } else {
            Err(meta.error("unsupported key in #[unit(...)]; expected symbol, dimension, ratio or accessor"))
        }
    }

    fn finish(self, span: Span) -> syn::Result<UnitArgs> {
        let missing = |key: &str| syn::Error::new(span, format!("#[unit(...)] needs `{key} = ...`"));
        Ok(UnitArgs {
            symbol: self.symbol.ok_or_else(|| missing("symbol"))?,
            dimension: self.dimension.ok_or_else(|| missing("dimension"))?,
            ratio: self.ratio.ok_or_else(|| missing("ratio"))?,
            accessor: self.accessor,
        })
    }
}

fn unit_args(input: &DeriveInput) -> syn::Result<UnitArgs> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| syn::Error::new(input.ident.span(), "`#[derive(Unit)]` needs a #[unit(...)] attribute"))?;

    let mut args = PartialArgs::default();
    attr.parse_nested_meta(|meta| args.accept(meta))?;
    args.finish(input.ident.span())
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let marker = &input.ident;
    let UnitArgs {
        symbol,
        dimension,
        ratio,
        accessor,
    } = unit_args(input)?;

    let accessors = accessor.map(|accessor| {
        let from_fn = format_ident!("from_{}", accessor);
        let in_fn = format_ident!("in_{}", accessor);
        let from_doc = format!("Creates a quantity from a value in {} (`{}`).", accessor, symbol.value());
        let in_doc = format!("Returns the value expressed in {} (`{}`).", accessor, symbol.value());
        quote! {
            impl crate::Quantity<#dimension> {
                #[doc = #from_doc]
                #[inline]
                pub const fn #from_fn(value: f32) -> Self {
                    Self::from_unit::<#marker>(value)
                }

                #[doc = #in_doc]
                #[inline]
                pub const fn #in_fn(self) -> f32 {
                    self.in_unit::<#marker>()
                }
            }
        }
    });

    Ok(quote! {
        impl crate::Unit for #marker {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        #accessors
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expanded(input: DeriveInput) -> String {
        expand(&input).unwrap().to_string()
    }

    fn error_of(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(tokens) => panic!("expected an error, got {}", tokens),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn unit_impl_carries_all_three_constants() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "mA", dimension = CurrentDim, ratio = 1e-3)]
            pub struct Milliampere;
        });
        assert!(code.contains("impl crate :: Unit for Milliampere"));
        assert!(code.contains("const RATIO : f64 = 1e-3"));
        assert!(code.contains("type Dim = CurrentDim"));
        assert!(code.contains("const SYMBOL : & 'static str = \"mA\""));
    }

    #[test]
    fn no_accessor_means_no_inherent_methods() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "mA", dimension = CurrentDim, ratio = 1e-3)]
            pub struct Milliampere;
        });
        assert!(!code.contains("impl crate :: Quantity"));
    }

    #[test]
    fn accessor_generates_from_and_in_pair() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "kPa", dimension = PressureDim, ratio = 1e3, accessor = kilopascals)]
            pub struct Kilopascal;
        });
        assert!(code.contains("impl crate :: Quantity < PressureDim >"));
        assert!(code.contains("pub const fn from_kilopascals (value : f32) -> Self"));
        assert!(code.contains("pub const fn in_kilopascals (self) -> f32"));
        assert!(code.contains("from_unit :: < Kilopascal >"));
        assert!(code.contains("in_unit :: < Kilopascal >"));
        assert!(code.contains("Creates a quantity from a value in kilopascals (`kPa`)."));
    }

    #[test]
    fn ratio_may_be_an_expression() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "kn", dimension = VelocityDim, ratio = 1.0 / 1.9438444924, accessor = knots)]
            pub struct Knot;
        });
        assert!(code.contains("const RATIO : f64 = 1.0 / 1.9438444924"));
    }

    #[test]
    fn dimension_may_be_a_path() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "/m", dimension = super::LineicNumberDim, ratio = 1.0)]
            pub struct UnitPerMeter;
        });
        assert!(code.contains("type Dim = super :: LineicNumberDim"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let code = expanded(parse_quote! {
            #[unit(symbol = "V", dimension = VoltageDim, ratio = 1.0, accessor = volts,)]
            pub struct Volt;
        });
        assert!(code.contains("from_volts"));
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = error_of(parse_quote! {
            pub struct Volt;
        });
        assert!(err.contains("needs a #[unit(...)] attribute"));
    }

    #[test]
    fn each_required_key_is_reported_when_missing() {
        let err = error_of(parse_quote! {
            #[unit(dimension = VoltageDim, ratio = 1.0)]
            pub struct Volt;
        });
        assert!(err.contains("`symbol = ...`"));

        let err = error_of(parse_quote! {
            #[unit(symbol = "V", ratio = 1.0)]
            pub struct Volt;
        });
        assert!(err.contains("`dimension = ...`"));

        let err = error_of(parse_quote! {
            #[unit(symbol = "V", dimension = VoltageDim)]
            pub struct Volt;
        });
        assert!(err.contains("`ratio = ...`"));
    }

    #[test]
    fn unknown_and_duplicate_keys_are_rejected() {
        let err = error_of(parse_quote! {
            #[unit(symbol = "V", dimension = VoltageDim, ratio = 1.0, plural = "volts")]
            pub struct Volt;
        });
        assert!(err.contains("unsupported key"));

        let err = error_of(parse_quote! {
            #[unit(symbol = "V", symbol = "kV", dimension = VoltageDim, ratio = 1.0)]
            pub struct Volt;
        });
        assert!(err.contains("duplicate key"));
    }

    #[test]
    fn accessor_must_be_an_identifier() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "V", dimension = VoltageDim, ratio = 1.0, accessor = "volts")]
            pub struct Volt;
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn errors_render_as_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Volt;
        };
        let tokens = expand(&input).unwrap_or_else(syn::Error::into_compile_error);
        assert!(tokens.to_string().contains("compile_error"));
    }
}
