//! Recovering catalog entries from rendered text.
//!
//! Every rendered message starts with `PREFIX-nnn: `, so the entry can be
//! recovered from a log line or a user report even after the numeric
//! identifier has been lost.

use crate::catalog::Catalog;

/// The catalog entry a rendered message came from.
///
/// Matches the `PREFIX-nnn:` head only; the rest of the text is not
/// inspected, so truncated messages are still recognized.
///
/// ```rust
/// use errcat::{ErrorCode, recognize};
///
/// assert_eq!(
///     recognize::<ErrorCode>("NJS-047: pool alias \"hr\" not found in connection pool cache"),
///     Some(ErrorCode::PoolWithAliasNotFound)
/// );
/// assert_eq!(recognize::<ErrorCode>("ORA-01017: invalid username/password"), None);
/// ```
pub fn recognize<C: Catalog>(message: &str) -> Option<C> {
    let rest = message.strip_prefix(C::PREFIX)?.strip_prefix('-')?;

    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 || !rest[digits..].starts_with(':') {
        return None;
    }

    C::from_code(rest[..digits].parse().ok()?)
}

/// The offending identifier named by a fallback message.
///
/// Returns `None` for any message that is not a complete fallback render.
///
/// ```rust
/// use errcat::{ErrorCode, MessageBuffer, fallback_id};
///
/// let mut buf = MessageBuffer::new();
/// let text = errcat::format_into!(&mut buf, -12);
/// assert_eq!(fallback_id::<ErrorCode>(text), Some(-12));
/// ```
pub fn fallback_id<C: Catalog>(message: &str) -> Option<i32> {
    let entry = recognize::<C>(message)?;
    if entry.id() != C::FALLBACK.id() {
        return None;
    }

    let captured = C::FALLBACK.template().captures(message)?;
    captured.first()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arg, ErrorCode, MessageBuffer, format_args_into};

    #[test]
    fn test_recognize_every_entry() {
        for &code in ErrorCode::ALL {
            let template = code.template();
            let args: Vec<Arg<'_>> = template
                .placeholders()
                .map(|p| match p.kind() {
                    crate::ArgKind::Int => Arg::Int(1),
                    crate::ArgKind::Uint => Arg::Uint(1),
                    crate::ArgKind::Str => Arg::Str("s"),
                    crate::ArgKind::Substr => Arg::Substr(b"b"),
                })
                .collect();

            let mut buf = MessageBuffer::new();
            let text = format_args_into(&mut buf, code, &args);
            assert_eq!(recognize::<ErrorCode>(text), Some(code), "{text}");
        }
    }

    #[test]
    fn test_recognize_rejects_malformed_heads() {
        assert_eq!(recognize::<ErrorCode>(""), None);
        assert_eq!(recognize::<ErrorCode>("NJS"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-:"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-002"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-002 invalid pool"), None);
        assert_eq!(recognize::<ErrorCode>("njs-002: invalid pool"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-006: retired"), None);
        assert_eq!(recognize::<ErrorCode>("NJS-99999999999: overflow"), None);
    }

    #[test]
    fn test_recognize_truncated_message() {
        assert_eq!(
            recognize::<ErrorCode>("NJS-040: connection requ"),
            Some(ErrorCode::ConnRequestTimeout)
        );
    }

    #[test]
    fn test_fallback_id() {
        assert_eq!(
            fallback_id::<ErrorCode>("NJS-068: invalid error number 9999 supplied"),
            Some(9999)
        );
        assert_eq!(
            fallback_id::<ErrorCode>("NJS-068: invalid error number 0 supplied"),
            Some(0)
        );
    }

    #[test]
    fn test_fallback_id_rejects_other_messages() {
        assert_eq!(fallback_id::<ErrorCode>("NJS-002: invalid pool"), None);
        assert_eq!(fallback_id::<ErrorCode>("NJS-068: invalid error number"), None);
        assert_eq!(
            fallback_id::<ErrorCode>("NJS-068: invalid error number x supplied"),
            None
        );
    }
}
