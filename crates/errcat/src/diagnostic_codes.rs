//! Centralized registry of diagnostic codes used by errcat's own error types.
//!
//! These constants document the codes used in `#[diagnostic(code(...))]`
//! attributes. While Rust's proc-macro system requires literal strings in
//! attributes, this module provides a single source of truth for matching
//! them programmatically.
//!
//! Catalog errors ([`Error`](crate::Error)) use the entry's display code
//! (`NJS-nnn`) instead.
//!
//! | Code | Description |
//! |------|-------------|
//! | `errcat::args::missing` | Placeholder has no argument |
//! | `errcat::args::kind` | Argument kind differs from the placeholder |
//! | `errcat::args::extra` | More arguments than placeholders |
//!
//! # Example
//!
//! ```rust
//! use errcat::{Catalog, ErrorCode, diagnostic_codes};
//! use miette::Diagnostic;
//!
//! let err = ErrorCode::InvalidPropertyValue.template().check(&[]).unwrap_err();
//! assert_eq!(
//!     err.code().map(|c| c.to_string()).as_deref(),
//!     Some(diagnostic_codes::ARG_MISSING)
//! );
//! ```

/// A placeholder has no matching argument.
pub const ARG_MISSING: &str = "errcat::args::missing";

/// An argument does not have the placeholder's kind.
pub const ARG_KIND: &str = "errcat::args::kind";

/// More arguments were supplied than the template has placeholders.
pub const ARG_EXTRA: &str = "errcat::args::extra";
