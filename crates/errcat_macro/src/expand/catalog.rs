//! `errcat::Catalog` implementation generation.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! impl ::errcat::Catalog for ErrorCode {
//!     const PREFIX: &'static str = "NJS";
//!     const FALLBACK: Self = Self::InvalidErrNum;
//!     const ALL: &'static [Self] = &[Self::MissingCallback, /* ... */];
//!
//!     fn id(self) -> i32 { match self { Self::MissingCallback => 1, /* ... */ } }
//!     fn from_id(id: i32) -> Option<Self> { /* ... */ }
//!     fn from_code(code: u32) -> Option<Self> { /* ... */ }
//!
//!     fn template(self) -> &'static ::errcat::Template {
//!         match self {
//!             Self::MissingCallback => {
//!                 static SEGMENTS: [::errcat::Segment; 1] =
//!                     [::errcat::Segment::Literal("NJS-001: expected callback as last parameter")];
//!                 static TEMPLATE: ::errcat::Template = ::errcat::Template::from_parts(
//!                     1,
//!                     "NJS-001",
//!                     "expected callback as last parameter",
//!                     &SEGMENTS,
//!                 );
//!                 &TEMPLATE
//!             }
//!             // ...
//!         }
//!     }
//! }
//! ```
//!
//! The display code is folded into the first literal segment, so rendering
//! a message is a single walk over its segments.

use proc_macro2::{Literal, TokenStream as QuoteStream};
use quote::{format_ident, quote};
use syn::Ident;

use crate::parse::CatalogAttr;
use crate::template::Piece;

use super::Entry;

pub fn generate_catalog_impl(
    enum_name: &Ident,
    catalog_attr: &CatalogAttr,
    entries: &[Entry],
    fallback: &Entry,
) -> QuoteStream {
    let prefix = &catalog_attr.prefix;
    let fallback_ident = &fallback.ident;

    let idents: Vec<&Ident> = entries.iter().map(|e| &e.ident).collect();
    let ids: Vec<Literal> = entries
        .iter()
        .map(|e| Literal::i32_unsuffixed(e.id))
        .collect();
    let codes: Vec<Literal> = entries
        .iter()
        .map(|e| Literal::u32_unsuffixed(e.code))
        .collect();

    let template_arms: Vec<QuoteStream> = entries
        .iter()
        .map(|entry| {
            let ident = &entry.ident;
            let id = Literal::i32_unsuffixed(entry.id);
            let code = display_code(prefix, catalog_attr.width, entry.code);
            let text = &entry.text;
            let segments = generate_segments(&code, &entry.pieces);
            let count = segments.len();

            quote! {
                Self::#ident => {
                    static SEGMENTS: [::errcat::Segment; #count] = [#(#segments),*];
                    static TEMPLATE: ::errcat::Template = ::errcat::Template::from_parts(
                        #id,
                        #code,
                        #text,
                        &SEGMENTS,
                    );
                    &TEMPLATE
                }
            }
        })
        .collect();

    quote! {
        impl ::errcat::Catalog for #enum_name {
            const PREFIX: &'static str = #prefix;
            const FALLBACK: Self = Self::#fallback_ident;
            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn id(self) -> i32 {
                match self {
                    #(Self::#idents => #ids,)*
                }
            }

            fn from_id(id: i32) -> ::core::option::Option<Self> {
                match id {
                    #(#ids => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn from_code(code: u32) -> ::core::option::Option<Self> {
                match code {
                    #(#codes => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn template(self) -> &'static ::errcat::Template {
                match self {
                    #(#template_arms)*
                }
            }
        }

        impl ::core::convert::From<#enum_name> for i32 {
            fn from(code: #enum_name) -> i32 {
                <#enum_name as ::errcat::Catalog>::id(code)
            }
        }
    }
}

/// `NJS` + `4` at width 3 gives `NJS-004`.
fn display_code(prefix: &str, width: usize, code: u32) -> String {
    format!("{prefix}-{code:0width$}")
}

fn generate_segments(code: &str, pieces: &[Piece]) -> Vec<QuoteStream> {
    let head = format!("{code}: ");
    let mut segments = Vec::with_capacity(pieces.len() + 1);

    let rest = match pieces.first() {
        Some(Piece::Literal(first)) => {
            let text = format!("{head}{first}");
            segments.push(quote! { ::errcat::Segment::Literal(#text) });
            &pieces[1..]
        }
        _ => {
            segments.push(quote! { ::errcat::Segment::Literal(#head) });
            pieces
        }
    };

    for piece in rest {
        segments.push(match piece {
            Piece::Literal(text) => quote! { ::errcat::Segment::Literal(#text) },
            Piece::Hole { name, kind } => {
                let kind = format_ident!("{}", kind.variant_name());
                quote! {
                    ::errcat::Segment::Hole(::errcat::Placeholder::new(#name, ::errcat::ArgKind::#kind))
                }
            }
        });
    }

    segments
}
