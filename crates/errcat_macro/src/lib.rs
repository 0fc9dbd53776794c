//! # errcat_macro
//!
//! This crate provides the `#[derive(ErrorCatalog)]` procedural macro.
//! It is a proc-macro crate, meaning it can only export procedural macros.
//!
//! ## Module Structure
//!
//! - `parse` - Attribute parsing for `#[catalog(...)]`, `#[message(...)]`, `#[fallback]`
//! - `template` - Placeholder parsing of message text
//! - `expand` - Validation and code generation

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// Internal modules - not exposed publicly
mod expand;
mod parse;
mod template;

/// Derive macro turning an enum into an error catalog.
///
/// Each variant is one diagnosable failure condition. Its discriminant is
/// the stable identifier, and its `#[message]` gives the published display
/// code and the message text.
///
/// # Attributes
///
/// - `#[catalog(prefix = "NJS")]` - Product prefix (required); `width = 3` sets code padding
/// - `#[message(code = 4, "invalid value for property {property:str}")]` - Per variant (required)
/// - `#[fallback]` - The entry rendered for out-of-range identifiers (exactly one)
///
/// Placeholders are `{name:int}`, `{name:uint}`, `{name:str}` and
/// `{name:substr}`; `{{` and `}}` are literal braces.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, ErrorCatalog)]
/// #[catalog(prefix = "NJS")]
/// pub enum ErrorCode {
///     #[message(code = 2, "invalid pool")]
///     InvalidPool = 1,
///
///     #[fallback]
///     #[message(code = 68, "invalid error number {id:int} supplied")]
///     InvalidErrNum = 2,
/// }
/// ```
///
/// # Generated Code
///
/// The macro generates:
/// 1. `impl errcat::Catalog for ErrorCode`, backed by one `static` template per variant
/// 2. `impl From<ErrorCode> for i32`
///
/// Identifiers must be explicit and run `1, 2, ..., N` in declaration
/// order; anything else is a compile error.
#[proc_macro_derive(ErrorCatalog, attributes(catalog, message, fallback))]
pub fn derive_error_catalog(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // On error, convert to a compile_error!() invocation
    expand::Expander::expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
