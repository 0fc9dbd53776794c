//! Parsed message templates.
//!
//! A [`Template`] is produced at compile time by `#[derive(ErrorCatalog)]`:
//! the message text is split into [`Segment`]s, and the display code
//! (`NJS-004: `) is folded into the leading literal. Rendering is a single
//! pass over the segments, taking one [`Arg`] per [`Segment::Hole`].

use std::fmt::{self, Display, Formatter, Write};

use crate::ArgMismatch;
use crate::args::{Arg, ArgKind};

/// Text written in place of a placeholder that has no argument.
pub const MISSING_ARG: &str = "<?>";

/// A named, typed placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placeholder {
    name: &'static str,
    kind: ArgKind,
}

impl Placeholder {
    /// Creates a placeholder.
    pub const fn new(name: &'static str, kind: ArgKind) -> Self {
        Self { name, kind }
    }

    /// The name given in the message text.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The argument kind expected here.
    pub const fn kind(&self) -> ArgKind {
        self.kind
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}}}", self.name, self.kind)
    }
}

/// One piece of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is.
    Literal(&'static str),

    /// A slot filled by the next argument.
    Hole(Placeholder),
}

/// The message template of one catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    id: i32,
    code: &'static str,
    text: &'static str,
    segments: &'static [Segment],
}

impl Template {
    /// Assembles a template. Called from derive-generated code, which has
    /// already validated the parts.
    #[doc(hidden)]
    pub const fn from_parts(
        id: i32,
        code: &'static str,
        text: &'static str,
        segments: &'static [Segment],
    ) -> Self {
        Self {
            id,
            code,
            text,
            segments,
        }
    }

    /// The identifier this template belongs to.
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The display code, e.g. `NJS-004`.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The message text as declared, placeholders included.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// The rendering segments.
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// The placeholders in argument order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static Placeholder> + 'static {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Hole(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Number of arguments the template takes.
    pub fn arity(&self) -> usize {
        self.placeholders().count()
    }

    /// Checks an argument sequence against the placeholders.
    ///
    /// Rendering never fails on a mismatch; this is how tests and tooling
    /// find one.
    pub fn check(&self, args: &[Arg<'_>]) -> Result<(), ArgMismatch> {
        for (index, placeholder) in self.placeholders().enumerate() {
            let position = index + 1;
            match args.get(index) {
                None => {
                    return Err(ArgMismatch::Missing {
                        code: self.code,
                        position,
                        name: placeholder.name,
                        expected: placeholder.kind,
                    });
                }
                Some(arg) if arg.kind() != placeholder.kind => {
                    return Err(ArgMismatch::Kind {
                        code: self.code,
                        position,
                        name: placeholder.name,
                        expected: placeholder.kind,
                        found: arg.kind(),
                    });
                }
                Some(_) => {}
            }
        }

        let arity = self.arity();
        if args.len() > arity {
            return Err(ArgMismatch::Extra {
                code: self.code,
                expected: arity,
                found: args.len(),
            });
        }

        Ok(())
    }

    /// Writes the message. Missing arguments become [`MISSING_ARG`], extra
    /// arguments are ignored, and an argument of the wrong kind is written
    /// as what it is.
    pub(crate) fn write_to<W: Write>(&self, out: &mut W, args: &[Arg<'_>]) -> fmt::Result {
        let mut args = args.iter();

        for segment in self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Hole(_) => match args.next() {
                    Some(arg) => write!(out, "{arg}")?,
                    None => out.write_str(MISSING_ARG)?,
                },
            }
        }

        Ok(())
    }

    /// Recovers the substituted argument text from a message rendered with
    /// this template.
    ///
    /// A placeholder captures up to the earliest occurrence of the literal
    /// that follows it for which the rest of the message still matches, so
    /// arguments that themselves contain that literal are recovered. Returns
    /// `None` when the text does not have this template's shape (including
    /// truncated messages).
    ///
    /// ```rust
    /// use errcat::{Catalog, ErrorCode};
    ///
    /// let template = ErrorCode::InvalidErrNum.template();
    /// let captured = template.captures("NJS-068: invalid error number 9999 supplied");
    /// assert_eq!(captured, Some(vec!["9999"]));
    /// ```
    pub fn captures<'t>(&self, rendered: &'t str) -> Option<Vec<&'t str>> {
        let mut captured = Vec::with_capacity(self.arity());
        match_segments(self.segments, rendered, &mut captured).then_some(captured)
    }
}

/// Matches `rest` against `segments`, pushing one capture per hole.
///
/// On failure `captured` is left as it was on entry.
fn match_segments<'t>(segments: &[Segment], rest: &'t str, captured: &mut Vec<&'t str>) -> bool {
    let Some((first, tail)) = segments.split_first() else {
        return rest.is_empty();
    };

    match first {
        Segment::Literal(text) => match rest.strip_prefix(text) {
            Some(rest) => match_segments(tail, rest, captured),
            None => false,
        },
        Segment::Hole(_) => {
            let next = match tail.first() {
                None => {
                    captured.push(rest);
                    return true;
                }
                Some(Segment::Literal(next)) => *next,
                Some(Segment::Hole(_)) => "",
            };

            let mut start = 0;
            while let Some(found) = rest[start..].find(next) {
                let end = start + found;
                captured.push(&rest[..end]);
                if match_segments(tail, &rest[end..], captured) {
                    return true;
                }
                captured.pop();

                match rest[end..].chars().next() {
                    Some(c) => start = end + c.len_utf8(),
                    None => break,
                }
            }

            false
        }
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}
