//! Property-based tests for rendering.

use errcat::{Arg, Catalog, ErrorCode, MAX_MESSAGE_LEN, MessageBuffer, fallback_id, recognize};
use proptest::prelude::*;

fn any_arg() -> impl Strategy<Value = (i64, u64, String, Vec<u8>, u8)> {
    (
        any::<i64>(),
        any::<u64>(),
        ".{0,2000}",
        proptest::collection::vec(any::<u8>(), 0..64),
        0u8..4,
    )
}

fn to_arg<'a>((int, uint, text, bytes, pick): &'a (i64, u64, String, Vec<u8>, u8)) -> Arg<'a> {
    match pick {
        0 => Arg::Int(*int),
        1 => Arg::Uint(*uint),
        2 => Arg::Str(text),
        _ => Arg::Substr(bytes),
    }
}

proptest! {
    /// Any identifier renders something, within bounds, as valid UTF-8.
    #[test]
    fn prop_any_identifier_renders(id in any::<i32>()) {
        let mut buf = MessageBuffer::new();
        let text = errcat::format_into!(&mut buf, id);

        prop_assert!(!text.is_empty());
        prop_assert!(text.len() <= MAX_MESSAGE_LEN);
        prop_assert!(text.starts_with("NJS-"));
    }

    /// Identifiers outside the catalog always produce the fallback, naming the value.
    #[test]
    fn prop_out_of_range_is_fallback(id in any::<i32>().prop_filter("outside catalog", |id| {
        ErrorCode::from_id(*id).is_none()
    })) {
        let mut buf = MessageBuffer::new();
        let text = errcat::format_into!(&mut buf, id);

        prop_assert_eq!(text, format!("NJS-068: invalid error number {id} supplied"));
        prop_assert_eq!(recognize::<ErrorCode>(text), Some(ErrorCode::InvalidErrNum));
        prop_assert_eq!(fallback_id::<ErrorCode>(text), Some(id));
    }

    /// Arbitrary arguments of arbitrary kinds never overrun the buffer or
    /// break UTF-8, and the result is recognizable.
    #[test]
    fn prop_arbitrary_arguments_stay_bounded(
        index in 0..ErrorCode::ALL.len(),
        raw in proptest::collection::vec(any_arg(), 0..6),
    ) {
        let code = ErrorCode::ALL[index];
        let args: Vec<Arg<'_>> = raw.iter().map(to_arg).collect();

        let mut buf = MessageBuffer::new();
        let text = errcat::format_args_into(&mut buf, code, &args);

        prop_assert!(text.len() <= MAX_MESSAGE_LEN);
        prop_assert_eq!(text.len(), buf.len());
        prop_assert!(std::str::from_utf8(buf.as_bytes()).is_ok());
        prop_assert_eq!(recognize::<ErrorCode>(buf.as_str()), Some(code));
    }

    /// Same inputs, same bytes.
    #[test]
    fn prop_rendering_is_idempotent(
        id in -5i32..60,
        text in ".{0,1500}",
        number in any::<i64>(),
    ) {
        let args = [Arg::from(text.as_str()), Arg::from(number)];

        let mut first = MessageBuffer::new();
        let mut second = MessageBuffer::new();
        errcat::format_args_into(&mut first, id, &args);
        errcat::format_args_into(&mut second, id, &args);

        prop_assert_eq!(first.as_bytes(), second.as_bytes());
    }

    /// Raw slices of any size get a prefix of the full message.
    #[test]
    fn prop_slice_output_is_prefix(
        index in 0..ErrorCode::ALL.len(),
        capacity in 0usize..200,
        alias in "[a-zA-Zé€]{0,40}",
    ) {
        let code = ErrorCode::ALL[index];
        let args = [Arg::from(alias.as_str())];

        let mut full = MessageBuffer::new();
        errcat::format_args_into(&mut full, code, &args);

        let mut raw = vec![0u8; capacity];
        let len = errcat::format_into_slice(&mut raw, code, &args);

        prop_assert!(len <= capacity);
        prop_assert!(full.as_bytes().starts_with(&raw[..len]));
        prop_assert!(std::str::from_utf8(&raw[..len]).is_ok());
    }
}
