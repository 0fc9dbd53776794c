//! Typed format arguments.
//!
//! Every placeholder in a catalog message declares an [`ArgKind`]; callers
//! supply one [`Arg`] per placeholder, in order. Conversions from the usual
//! integer and string types let call sites pass plain values:
//!
//! ```rust
//! use errcat::{Arg, ArgKind};
//!
//! assert_eq!(Arg::from(30).kind(), ArgKind::Int);
//! assert_eq!(Arg::from(7u32).kind(), ArgKind::Uint);
//! assert_eq!(Arg::from("poolMax").kind(), ArgKind::Str);
//! assert_eq!(Arg::substr(b"name_and_more", 4).to_string(), "name");
//! ```

use std::fmt::{self, Display, Formatter, Write};

/// The kind of value a placeholder expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArgKind {
    /// A signed integer (`{name:int}`).
    Int,

    /// An unsigned integer (`{name:uint}`).
    Uint,

    /// A string slice (`{name:str}`).
    Str,

    /// A length-delimited byte slice (`{name:substr}`), such as a bind name
    /// cut out of a larger statement buffer. Invalid UTF-8 renders as U+FFFD.
    Substr,
}

impl ArgKind {
    /// The kind name as written in message text.
    pub const fn name(self) -> &'static str {
        match self {
            ArgKind::Int => "int",
            ArgKind::Uint => "uint",
            ArgKind::Str => "str",
            ArgKind::Substr => "substr",
        }
    }
}

impl Display for ArgKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One format argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed integer, widened to `i64`.
    Int(i64),

    /// Unsigned integer, widened to `u64`.
    Uint(u64),

    /// String slice.
    Str(&'a str),

    /// Byte slice with an explicit length.
    Substr(&'a [u8]),
}

impl<'a> Arg<'a> {
    /// The first `len` bytes of `bytes`, clamped to the slice length.
    pub fn substr(bytes: &'a [u8], len: usize) -> Self {
        Arg::Substr(&bytes[..len.min(bytes.len())])
    }

    /// The kind this argument satisfies.
    pub const fn kind(&self) -> ArgKind {
        match self {
            Arg::Int(_) => ArgKind::Int,
            Arg::Uint(_) => ArgKind::Uint,
            Arg::Str(_) => ArgKind::Str,
            Arg::Substr(_) => ArgKind::Substr,
        }
    }
}

impl Display for Arg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(value) => Display::fmt(value, f),
            Arg::Uint(value) => Display::fmt(value, f),
            Arg::Str(value) => f.write_str(value),
            Arg::Substr(bytes) => {
                for chunk in bytes.utf8_chunks() {
                    f.write_str(chunk.valid())?;
                    if !chunk.invalid().is_empty() {
                        f.write_char(char::REPLACEMENT_CHARACTER)?;
                    }
                }
                Ok(())
            }
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Arg::Substr(value)
    }
}

/// An argument sequence that has already been collected, for callers that
/// forward their own arguments one level down.
///
/// # Example
///
/// ```rust
/// use errcat::{Arg, ArgList, ErrorCode, MessageBuffer};
///
/// fn report(buf: &mut MessageBuffer, args: ArgList<'_>) -> String {
///     errcat::format_list_into(buf, ErrorCode::InvalidPropertyValue, args).to_string()
/// }
///
/// let mut buf = MessageBuffer::new();
/// let args = [Arg::from("poolMax")];
/// assert!(report(&mut buf, ArgList::new(&args)).ends_with("property poolMax"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArgList<'a> {
    args: &'a [Arg<'a>],
}

impl<'a> ArgList<'a> {
    /// Wraps an argument slice.
    pub const fn new(args: &'a [Arg<'a>]) -> Self {
        Self { args }
    }

    /// The arguments as a slice.
    pub const fn as_slice(&self) -> &'a [Arg<'a>] {
        self.args
    }

    /// Number of arguments.
    pub const fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether the list is empty.
    pub const fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates over the arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Arg<'a>> {
        self.args.iter()
    }
}

impl<'a> From<&'a [Arg<'a>]> for ArgList<'a> {
    fn from(args: &'a [Arg<'a>]) -> Self {
        Self::new(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Arg::from(-5i8), Arg::Int(-5));
        assert_eq!(Arg::from(30), Arg::Int(30));
        assert_eq!(Arg::from(i64::MIN), Arg::Int(i64::MIN));
        assert_eq!(Arg::from(7u16), Arg::Uint(7));
        assert_eq!(Arg::from(usize::MAX), Arg::Uint(usize::MAX as u64));
    }

    #[test]
    fn test_string_conversions() {
        let owned = String::from("alias");
        assert_eq!(Arg::from(&owned), Arg::Str("alias"));
        assert_eq!(Arg::from("x"), Arg::Str("x"));
        assert_eq!(Arg::from(&b"raw"[..]), Arg::Substr(b"raw"));
    }

    #[test]
    fn test_substr_clamps_length() {
        assert_eq!(Arg::substr(b"bind_name", 4), Arg::Substr(b"bind"));
        assert_eq!(Arg::substr(b"abc", 99), Arg::Substr(b"abc"));
        assert_eq!(Arg::substr(b"abc", 0), Arg::Substr(b""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::Int(-42).to_string(), "-42");
        assert_eq!(Arg::Uint(42).to_string(), "42");
        assert_eq!(Arg::Str("poolMax").to_string(), "poolMax");
        assert_eq!(Arg::Substr(b":id").to_string(), ":id");
    }

    #[test]
    fn test_substr_invalid_utf8_is_replaced() {
        let rendered = Arg::Substr(b"ab\xffcd").to_string();
        assert_eq!(rendered, "ab\u{FFFD}cd");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ArgKind::Int.to_string(), "int");
        assert_eq!(ArgKind::Substr.name(), "substr");
        assert_eq!(Arg::Str("x").kind(), ArgKind::Str);
    }

    #[test]
    fn test_arg_list() {
        let args = [Arg::Int(1), Arg::Str("two")];
        let list = ArgList::new(&args);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.iter().count(), 2);
        assert_eq!(list.as_slice()[1], Arg::Str("two"));
        assert!(ArgList::default().is_empty());
    }
}
