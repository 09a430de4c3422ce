//! Derive macro implementation used by `measura-core`.
//!
//! `measura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Dimension`, `crate::Quantity` and `crate::ParseError`, so it is intended to be used by
//! `measura-core` (or by crates that expose an identical crate-root API).
//!
//! A quantity kind is declared as a *unit table*: a field-less enum with one variant per unit. The derive turns
//! that table into everything the kind needs at runtime.
//!
//! # Generated impls
//!
//! For a unit enum `AngleUnit` tagged with `#[unit(dimension = AngleDim, name = "Angle")]`, the derive implements:
//!
//! - `crate::Dimension for AngleDim` (kind name and the SI unit)
//! - `crate::Unit for AngleUnit` (symbol, aliases, full name and SI ratio per variant)
//! - `PartialEq`, `Eq` and `Hash` for `AngleUnit`, all defined over the symbol
//! - `Display` (the symbol) and `FromStr` (symbol resolution) for `AngleUnit`
//! - one `from_<plural>` factory and one `<plural>()` accessor per unit on `crate::Quantity<AngleDim>`
//!
//! # Attributes
//!
//! On the enum, `#[unit(...)]` is required:
//!
//! - `dimension = SomeDim`: dimension marker type
//! - `name = "Angle"`: human-readable kind name
//!
//! On every variant, `#[unit(...)]` is required:
//!
//! - `symbol = "rad"`: primary unit symbol
//! - `ratio = 1.0`: size of one unit in SI units (`to_si(x) = x * ratio`)
//! - `alias = "deg"`: additional accepted symbol (repeatable)
//! - `plural = "radians"`: name used for the factory/accessor (defaults to snake case of the variant plus `s`)
//! - `si`: marks the SI unit of the kind (exactly one variant)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Path, Token,
};

/// Derive `crate::Unit` for a unit table enum and `crate::Dimension` for its dimension tag.
///
/// The enum must carry `#[unit(dimension = ..., name = "...")]` and every variant must carry
/// `#[unit(symbol = "...", ratio = ...)]`. Exactly one variant must be flagged `si`.
///
/// This macro is intended for use by `measura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let kind = parse_kind_attribute(&input.attrs)?;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`Unit` can only be derived for enums",
        ));
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "unit variants cannot carry fields",
            ));
        }
        let attr = parse_variant_attribute(&variant.ident, &variant.attrs)?;
        variants.push((variant.ident.clone(), attr));
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "a unit table needs at least one unit"));
    }

    let si_variants: Vec<&Ident> = variants
        .iter()
        .filter(|(_, attr)| attr.si)
        .map(|(ident, _)| ident)
        .collect();
    let si = match si_variants.as_slice() {
        [single] => *single,
        [] => {
            return Err(syn::Error::new_spanned(
                name,
                "exactly one variant must be marked `si`",
            ))
        }
        [_, second, ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one variant may be marked `si`",
            ))
        }
    };

    let dimension = &kind.dimension;
    let kind_name = &kind.name;

    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|(_, attr)| &attr.symbol).collect();
    let ratios: Vec<&Expr> = variants.iter().map(|(_, attr)| &attr.ratio).collect();
    let aliases: Vec<&Vec<LitStr>> = variants.iter().map(|(_, attr)| &attr.aliases).collect();
    let plurals: Vec<String> = variants.iter().map(|(_, attr)| attr.plural.clone()).collect();
    let full_names: Vec<String> = plurals.iter().map(|p| p.replace('_', " ")).collect();

    let accessors = variants.iter().map(|(ident, attr)| {
        let factory = format_ident!("from_{}", attr.plural);
        let accessor = format_ident!("{}", attr.plural);
        let symbol = attr.symbol.value();
        let words = attr.plural.replace('_', " ");
        let factory_doc = format!("Creates a quantity from a value in {words} (`{symbol}`).");
        let accessor_doc = format!("Returns this quantity expressed in {words} (`{symbol}`).");
        quote! {
            #[doc = #factory_doc]
            #[inline]
            pub fn #factory(value: f64) -> Self {
                Self::new(value, #name::#ident)
            }

            #[doc = #accessor_doc]
            #[inline]
            pub fn #accessor(self) -> f64 {
                self.value_in(#name::#ident)
            }
        }
    });

    let expanded = quote! {
        impl crate::Dimension for #dimension {
            type Unit = #name;
            const NAME: &'static str = #kind_name;
            const SI_UNIT: #name = #name::#si;
        }

        impl crate::Unit for #name {
            type Dim = #dimension;

            const ALL: &'static [Self] = &[#(#name::#idents),*];

            fn symbol(self) -> &'static str {
                match self {
                    #(#name::#idents => #symbols,)*
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    #(#name::#idents => &[#(#aliases),*],)*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(#name::#idents => #full_names,)*
                }
            }

            fn ratio(self) -> f64 {
                match self {
                    #(#name::#idents => #ratios,)*
                }
            }
        }

        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                crate::Unit::symbol(*self) == crate::Unit::symbol(*other)
            }
        }

        impl ::core::cmp::Eq for #name {}

        impl ::core::hash::Hash for #name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                crate::Unit::symbol(*self).hash(state);
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(crate::Unit::symbol(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as crate::Unit>::parse(s)
            }
        }

        impl crate::Quantity<#dimension> {
            #(#accessors)*
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct KindAttribute {
    dimension: Path,
    name: LitStr,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Path> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => dimension = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;

        Ok(KindAttribute { dimension, name })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    symbol: LitStr,
    ratio: Expr,
    aliases: Vec<LitStr>,
    plural: String,
    si: bool,
}

/// Raw variant attribute before the variant name is known; `plural` is defaulted later.
struct RawVariantAttribute {
    symbol: Option<LitStr>,
    ratio: Option<Expr>,
    aliases: Vec<LitStr>,
    plural: Option<LitStr>,
    si: bool,
}

impl Parse for RawVariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut raw = RawVariantAttribute {
            symbol: None,
            ratio: None,
            aliases: Vec::new(),
            plural: None,
            si: false,
        };

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "si" {
                raw.si = true;
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "symbol" => raw.symbol = Some(input.parse()?),
                    "ratio" => raw.ratio = Some(input.parse()?),
                    "alias" => raw.aliases.push(input.parse()?),
                    "plural" => raw.plural = Some(input.parse()?),
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(raw)
    }
}

fn parse_kind_attribute(attrs: &[Attribute]) -> syn::Result<KindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<KindAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

fn parse_variant_attribute(variant: &Ident, attrs: &[Attribute]) -> syn::Result<VariantAttribute> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| {
            syn::Error::new(variant.span(), "missing #[unit(...)] attribute on variant")
        })?;
    let raw = attr.parse_args::<RawVariantAttribute>()?;

    let symbol = raw.symbol.ok_or_else(|| {
        syn::Error::new(variant.span(), "missing required attribute `symbol`")
    })?;
    let ratio = raw
        .ratio
        .ok_or_else(|| syn::Error::new(variant.span(), "missing required attribute `ratio`"))?;
    let plural = match raw.plural {
        Some(lit) => lit.value(),
        None => format!("{}s", snake_case(&variant.to_string())),
    };

    Ok(VariantAttribute {
        symbol,
        ratio,
        aliases: raw.aliases,
        plural,
        si: raw.si,
    })
}

/// `KilometrePerHour` -> `kilometre_per_hour`.
fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
