//! # errcat
//!
//! A fixed catalog of error messages keyed by stable numeric identifiers,
//! and an allocation-free formatter that renders them into caller-owned
//! buffers.
//!
//! Every failure a driver binding can report has exactly one identifier and
//! one message template. Rendered messages always begin with a greppable
//! display code (`NJS-002: invalid pool`), so the condition can be
//! identified from the text alone.
//!
//! ## Features
//!
//! - **Compile-time checked catalog** - `#[derive(ErrorCatalog)]` rejects gaps in
//!   identifiers, duplicate codes and malformed placeholders
//! - **Typed placeholders** - `{name:int}`, `{name:uint}`, `{name:str}`, `{name:substr}`
//! - **Total formatting** - unknown identifiers render a fallback naming the
//!   offending value; rendering never fails or panics
//! - **Bounded output** - at most [`MAX_MESSAGE_LEN`] bytes, silently truncated
//!   on a UTF-8 boundary
//! - **Rich diagnostics** - [`Error`] integrates with [`miette`]
//!
//! ## Quick Start
//!
//! ```rust
//! use errcat::{ErrorCode, MessageBuffer};
//!
//! let mut buf = MessageBuffer::new();
//!
//! let text = errcat::format_into!(&mut buf, ErrorCode::InvalidPropertyValue, "poolMax");
//! assert_eq!(text, "NJS-004: invalid value for property poolMax");
//!
//! let text = errcat::format_into!(&mut buf, 9999);
//! assert_eq!(text, "NJS-068: invalid error number 9999 supplied");
//! ```
//!
//! ## Calling Conventions
//!
//! | Entry point | Use |
//! |-------------|-----|
//! | [`format_into!`] | arguments listed at the call site |
//! | [`format_args_into`] / [`format_list_into`] | arguments already collected |
//! | [`format_into_slice`] | raw byte buffer |
//! | [`formatter::format_with`] | a catalog other than [`ErrorCode`] |
//! | [`catalog_error!`] / [`Error::new`] | owned error value for returning |
//!
//! All of them go through [`formatter::render`].
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `tracing` | Events for fallback renders and argument mismatches | No |
//! | `serde` | `Serialize` for [`CatalogDescription`] | No |
//! | `fancy` | miette's graphical report handler | No |

// Lets derive-generated `::errcat::` paths resolve inside this crate.
extern crate self as errcat;

pub use errcat_macro::ErrorCatalog;

pub mod args;
pub mod buffer;
pub mod catalog;
pub mod codes;
pub mod describe;
pub mod diagnostic_codes;
pub mod error;
pub mod formatter;
pub mod recognize;
pub mod template;

pub use args::{Arg, ArgKind, ArgList};
pub use buffer::{MAX_MESSAGE_LEN, MessageBuffer};
pub use catalog::{Catalog, SUCCESS};
pub use codes::ErrorCode;
pub use describe::{CatalogDescription, CatalogEntry, describe};
pub use error::{ArgMismatch, Error};
pub use formatter::{format_args_into, format_into_slice, format_list_into};
pub use recognize::{fallback_id, recognize};
pub use template::{MISSING_ARG, Placeholder, Segment, Template};

/// Renders a driver error into a [`MessageBuffer`], with arguments listed
/// at the call site.
///
/// Each argument goes through [`Arg::from`], so integers, `&str`,
/// `&String` and `&[u8]` can be passed directly. Evaluates to the rendered
/// `&str`.
///
/// ```rust
/// use errcat::{Arg, ErrorCode, MessageBuffer};
///
/// let mut buf = MessageBuffer::new();
/// let text = errcat::format_into!(
///     &mut buf,
///     ErrorCode::IncompatibleTypeArrayBind,
///     3,
///     Arg::substr(b"ids, names", 3),
/// );
/// assert_eq!(text, "NJS-037: invalid data type at array index 3 for bind \":ids\"");
/// ```
#[macro_export]
macro_rules! format_into {
    ($buf:expr, $id:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_args_into($buf, $id, &[$($crate::Arg::from($arg)),*])
    };
}

/// Builds an [`Error`] from the driver catalog, with arguments listed at
/// the call site.
///
/// ```rust
/// use errcat::ErrorCode;
///
/// fn acquire(queue_timeout: i32) -> Result<(), errcat::Error> {
///     Err(errcat::catalog_error!(ErrorCode::ConnRequestTimeout, queue_timeout))
/// }
///
/// let err = acquire(60000).unwrap_err();
/// assert_eq!(err.code(), "NJS-040");
/// assert!(err.message().ends_with("queueTimeout of 60000"));
/// ```
#[macro_export]
macro_rules! catalog_error {
    ($id:expr $(, $arg:expr)* $(,)?) => {
        $crate::Error::new($id, &[$($crate::Arg::from($arg)),*])
    };
}
