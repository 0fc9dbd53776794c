//! Message rendering.
//!
//! [`render`] is the only rendering routine. Every public entry point
//! collects its arguments into a `&[Arg]` and calls it:
//!
//! | Entry point | Calling convention |
//! |-------------|--------------------|
//! | [`format_into!`](crate::format_into) | direct, arguments listed at the call site |
//! | [`format_args_into`] | forwarding, arguments already in a slice |
//! | [`format_list_into`] | forwarding, arguments in an [`ArgList`] |
//! | [`format_into_slice`] | direct slice, raw byte buffer of any capacity |
//! | [`format_with`] | any derived catalog |
//!
//! Rendering is total: identifiers outside `1..=max_id()` produce the
//! catalog's fallback message naming the offending identifier, argument
//! mismatches never fail, and output is silently truncated at
//! [`MAX_MESSAGE_LEN`](crate::MAX_MESSAGE_LEN) bytes (or the slice length,
//! if smaller). Nothing is allocated.

use std::fmt::Write;

use crate::args::{Arg, ArgList};
use crate::buffer::{BoundedWriter, MessageBuffer};
use crate::catalog::Catalog;
use crate::codes::ErrorCode;

/// Renders `id` from catalog `C` into any `fmt::Write` sink.
///
/// Sinks other than the bounded buffers used by the `format_*` functions
/// are not truncated. Errors come only from the sink.
pub fn render<C: Catalog, W: Write>(out: &mut W, id: i32, args: &[Arg<'_>]) -> std::fmt::Result {
    match C::lookup(id) {
        Some(template) => {
            #[cfg(feature = "tracing")]
            if let Err(mismatch) = template.check(args) {
                tracing::warn!(code = template.code(), %mismatch, "message arguments do not match template");
            }

            template.write_to(out, args)
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(id, max_id = C::max_id(), "unknown error identifier, rendering fallback");

            // Taken straight from the catalog, so this cannot come back here.
            C::FALLBACK
                .template()
                .write_to(out, &[Arg::Int(i64::from(id))])
        }
    }
}

/// Renders `id` from catalog `C` into `buf` and returns the text.
pub fn format_with<'b, C: Catalog>(
    buf: &'b mut MessageBuffer,
    id: impl Into<i32>,
    args: &[Arg<'_>],
) -> &'b str {
    let id = id.into();
    buf.fill(|writer| {
        // A bounded writer never reports an error.
        let _ = render::<C, _>(writer, id, args);
    });
    buf.as_str()
}

/// Renders a driver error from an already-collected argument slice.
///
/// ```rust
/// use errcat::{Arg, ErrorCode, MessageBuffer};
///
/// let mut buf = MessageBuffer::new();
/// let text = errcat::format_args_into(&mut buf, ErrorCode::ConnRequestTimeout, &[Arg::from(30)]);
/// assert!(text.ends_with("queueTimeout of 30"));
/// ```
pub fn format_args_into<'b>(
    buf: &'b mut MessageBuffer,
    id: impl Into<i32>,
    args: &[Arg<'_>],
) -> &'b str {
    format_with::<ErrorCode>(buf, id, args)
}

/// Renders a driver error from a forwarded [`ArgList`].
pub fn format_list_into<'b>(
    buf: &'b mut MessageBuffer,
    id: impl Into<i32>,
    args: ArgList<'_>,
) -> &'b str {
    format_with::<ErrorCode>(buf, id, args.as_slice())
}

/// Renders a driver error into a raw byte buffer and returns the number of
/// bytes written.
///
/// At most `min(out.len(), MAX_MESSAGE_LEN)` bytes are written, always
/// ending on a UTF-8 boundary. No terminator is appended.
///
/// ```rust
/// use errcat::ErrorCode;
///
/// let mut out = [0u8; 12];
/// let len = errcat::format_into_slice(&mut out, ErrorCode::InvalidPool, &[]);
/// assert_eq!(&out[..len], b"NJS-002: inv");
/// ```
pub fn format_into_slice(out: &mut [u8], id: impl Into<i32>, args: &[Arg<'_>]) -> usize {
    let id = id.into();
    let mut writer = BoundedWriter::new(out);
    let _ = render::<ErrorCode, _>(&mut writer, id, args);
    writer.len()
}
