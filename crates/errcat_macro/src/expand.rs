//! Macro expansion orchestration.
//!
//! [`Expander::expand`] validates the annotated enum and hands the collected
//! [`Entry`] list to [`catalog::generate_catalog_impl`].
//!
//! # Checks
//!
//! - the input is a non-generic enum of unit variants
//! - every variant has an explicit integer discriminant, and the
//!   discriminants run `1, 2, ..., N` in declaration order
//! - every variant has exactly one valid `#[message(...)]`
//! - display codes are unique
//! - exactly one variant is `#[fallback]`, and its message has a single
//!   `int` placeholder
//!
//! Errors from independent variants are combined so that one compile run
//! reports all of them.

mod catalog;

use std::collections::HashMap;

use proc_macro2::TokenStream as QuoteStream;
use syn::{Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, Variant};

use crate::parse::{CatalogAttr, MessageAttr, is_fallback};
use crate::template::{Kind, Piece, parse_template};

/// A validated catalog variant.
pub struct Entry {
    pub ident: Ident,
    pub id: i32,
    pub code: u32,
    pub text: String,
    pub pieces: Vec<Piece>,
    pub fallback: bool,
}

pub struct Expander;

impl Expander {
    pub fn expand(input: DeriveInput) -> syn::Result<QuoteStream> {
        let data = Self::require_enum(&input)?;

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "ErrorCatalog cannot be derived for generic enums",
            ));
        }

        let catalog_attr = CatalogAttr::from_attributes(&input.attrs, &input.ident)?;

        if data.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "an error catalog needs at least one entry",
            ));
        }

        let mut errors: Option<syn::Error> = None;
        let mut entries = Vec::with_capacity(data.variants.len());

        for (index, variant) in data.variants.iter().enumerate() {
            match Self::collect_entry(index, variant) {
                Ok(entry) => entries.push(entry),
                Err(err) => push_error(&mut errors, err),
            }
        }

        if let Some(err) = errors {
            return Err(err);
        }

        Self::check_unique_codes(&entries)?;
        let fallback = Self::find_fallback(&input.ident, &entries)?;

        Ok(catalog::generate_catalog_impl(
            &input.ident,
            &catalog_attr,
            &entries,
            fallback,
        ))
    }

    fn require_enum(input: &DeriveInput) -> syn::Result<&DataEnum> {
        match &input.data {
            Data::Enum(data) => Ok(data),
            Data::Struct(data) => Err(syn::Error::new_spanned(
                data.struct_token,
                "ErrorCatalog can only be derived for enums",
            )),
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "ErrorCatalog can only be derived for enums",
            )),
        }
    }

    fn collect_entry(index: usize, variant: &Variant) -> syn::Result<Entry> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "catalog entries cannot carry fields",
            ));
        }

        let expected = i32::try_from(index + 1)
            .map_err(|_| syn::Error::new_spanned(&variant.ident, "too many catalog entries"))?;
        let id = Self::discriminant(variant)?;
        if id != expected {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!(
                    "expected identifier {expected}, found {id}; identifiers run from 1 without gaps in declaration order"
                ),
            ));
        }

        let message = MessageAttr::from_variant(&variant.attrs, &variant.ident)?;
        let text = message.text.value();
        let pieces = parse_template(&text)
            .map_err(|err| syn::Error::new_spanned(&message.text, err.to_string()))?;

        Ok(Entry {
            ident: variant.ident.clone(),
            id,
            code: message.code,
            text,
            pieces,
            fallback: is_fallback(&variant.attrs)?,
        })
    }

    fn discriminant(variant: &Variant) -> syn::Result<i32> {
        let Some((_, expr)) = &variant.discriminant else {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "catalog entries need an explicit identifier, e.g. `InvalidPool = 2`",
            ));
        };

        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => lit.base10_parse(),
            other => Err(syn::Error::new_spanned(
                other,
                "identifier must be an integer literal",
            )),
        }
    }

    fn check_unique_codes(entries: &[Entry]) -> syn::Result<()> {
        let mut seen: HashMap<u32, &Ident> = HashMap::new();
        let mut errors: Option<syn::Error> = None;

        for entry in entries {
            if let Some(first) = seen.insert(entry.code, &entry.ident) {
                push_error(
                    &mut errors,
                    syn::Error::new_spanned(
                        &entry.ident,
                        format!("code {} is already used by `{first}`", entry.code),
                    ),
                );
            }
        }

        errors.map_or(Ok(()), Err)
    }

    fn find_fallback<'a>(enum_name: &Ident, entries: &'a [Entry]) -> syn::Result<&'a Entry> {
        let mut fallbacks = entries.iter().filter(|e| e.fallback);

        let Some(fallback) = fallbacks.next() else {
            return Err(syn::Error::new_spanned(
                enum_name,
                "one entry must be marked #[fallback] to report invalid identifiers",
            ));
        };

        if let Some(extra) = fallbacks.next() {
            return Err(syn::Error::new_spanned(
                &extra.ident,
                format!("`{}` is already the #[fallback] entry", fallback.ident),
            ));
        }

        let holes: Vec<Kind> = fallback
            .pieces
            .iter()
            .filter_map(|p| match p {
                Piece::Hole { kind, .. } => Some(*kind),
                Piece::Literal(_) => None,
            })
            .collect();

        if holes != [Kind::Int] {
            return Err(syn::Error::new_spanned(
                &fallback.ident,
                "the #[fallback] message must have exactly one `int` placeholder for the offending identifier",
            ));
        }

        Ok(fallback)
    }
}

fn push_error(errors: &mut Option<syn::Error>, err: syn::Error) {
    match errors {
        Some(existing) => existing.combine(err),
        None => *errors = Some(err),
    }
}
