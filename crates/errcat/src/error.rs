//! Error types.
//!
//! - [`Error`] is what driver code hands back to its caller: the rendered
//!   catalog message together with its identifier and display code.
//! - [`ArgMismatch`] describes an argument sequence that does not fit a
//!   template. Rendering tolerates mismatches; [`Template::check`] reports
//!   them.
//!
//! [`Template::check`]: crate::Template::check

use std::fmt::Display;

use miette::{Diagnostic, Severity};

use crate::args::{Arg, ArgKind};
use crate::buffer::MessageBuffer;
use crate::catalog::Catalog;
use crate::codes::ErrorCode;
use crate::formatter;

/// A failure reported through the catalog.
///
/// `Display` gives the rendered message and the miette diagnostic code is
/// the entry's display code, so a report reads:
///
/// ```text
///   × NJS-047: pool alias "reporting" not found in connection pool cache
///   ╰─ NJS-047
/// ```
///
/// # Example
///
/// ```rust
/// use errcat::{Arg, Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::PoolWithAliasNotFound, &[Arg::from("reporting")]);
/// assert_eq!(err.code(), "NJS-047");
/// assert_eq!(err.error_code(), Some(ErrorCode::PoolWithAliasNotFound));
/// assert!(err.to_string().contains("\"reporting\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    id: i32,
    code: &'static str,
    message: String,
}

impl Error {
    /// Renders `id` from the driver catalog.
    pub fn new(id: impl Into<i32>, args: &[Arg<'_>]) -> Self {
        Self::with_catalog::<ErrorCode>(id, args)
    }

    /// Renders `id` from catalog `C`.
    ///
    /// An out-of-range `id` yields the fallback message; [`Error::id`] still
    /// returns the identifier that was requested.
    pub fn with_catalog<C: Catalog>(id: impl Into<i32>, args: &[Arg<'_>]) -> Self {
        let id = id.into();
        let mut buf = MessageBuffer::new();
        let message = formatter::format_with::<C>(&mut buf, id, args).to_owned();
        let code = C::lookup(id)
            .unwrap_or_else(|| C::FALLBACK.template())
            .code();

        Self { id, code, message }
    }

    /// The identifier that was requested.
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The display code of the rendered entry, e.g. `NJS-002`.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The driver catalog entry, when the identifier belongs to it.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_id(self.id)
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }
}

/// An argument sequence that does not match a template's placeholders.
///
/// Positions are one-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ArgMismatch {
    /// A placeholder has no argument.
    #[error("{code}: missing argument {position} `{name}` ({expected})")]
    #[diagnostic(
        code(errcat::args::missing),
        help("pass one argument per placeholder, in order")
    )]
    Missing {
        /// Display code of the template.
        code: &'static str,
        /// Position of the placeholder.
        position: usize,
        /// Placeholder name.
        name: &'static str,
        /// Kind the placeholder expects.
        expected: ArgKind,
    },

    /// An argument has the wrong kind.
    #[error("{code}: argument {position} `{name}` expects {expected}, found {found}")]
    #[diagnostic(code(errcat::args::kind))]
    Kind {
        /// Display code of the template.
        code: &'static str,
        /// Position of the argument.
        position: usize,
        /// Placeholder name.
        name: &'static str,
        /// Kind the placeholder expects.
        expected: ArgKind,
        /// Kind that was supplied.
        found: ArgKind,
    },

    /// More arguments than placeholders.
    #[error("{code}: expected {expected} argument(s), found {found}")]
    #[diagnostic(code(errcat::args::extra), help("remove the extra arguments"))]
    Extra {
        /// Display code of the template.
        code: &'static str,
        /// Number of placeholders.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },
}
