//! Message text parsing.
//!
//! Catalog messages use typed placeholders of the form `{name:kind}`, where
//! `kind` is one of:
//!
//! | Kind | Argument |
//! |------|----------|
//! | `int` | signed integer |
//! | `uint` | unsigned integer |
//! | `str` | string slice |
//! | `substr` | length-delimited byte slice |
//!
//! Literal braces are written `{{` and `}}`. The text is split into literal
//! and placeholder pieces at expansion time so that a malformed message is a
//! compile error rather than a runtime surprise.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// The argument kind a placeholder expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Int,
    Uint,
    Str,
    Substr,
}

impl Kind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "int" => Some(Kind::Int),
            "uint" => Some(Kind::Uint),
            "str" => Some(Kind::Str),
            "substr" => Some(Kind::Substr),
            _ => None,
        }
    }

    /// Name of the matching `errcat::ArgKind` variant.
    pub const fn variant_name(self) -> &'static str {
        match self {
            Kind::Int => "Int",
            Kind::Uint => "Uint",
            Kind::Str => "Str",
            Kind::Substr => "Substr",
        }
    }
}

/// One piece of a parsed message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    Hole { name: String, kind: Kind },
}

/// Reasons a message text is rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
    UnclosedBrace { offset: usize },
    UnmatchedClose { offset: usize },
    MissingKind { placeholder: String },
    UnknownKind { name: String, kind: String },
    InvalidName { name: String },
    DuplicateName { name: String },
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnclosedBrace { offset } => {
                write!(f, "unclosed `{{` at byte {offset}; write `{{{{` for a literal brace")
            }

            TemplateError::UnmatchedClose { offset } => {
                write!(f, "unmatched `}}` at byte {offset}; write `}}}}` for a literal brace")
            }

            TemplateError::MissingKind { placeholder } => write!(
                f,
                "placeholder `{{{placeholder}}}` has no kind; expected `{{{placeholder}:int}}`, `:uint`, `:str` or `:substr`"
            ),

            TemplateError::UnknownKind { name, kind } => write!(
                f,
                "unknown kind `{kind}` for placeholder `{name}`; expected one of int, uint, str, substr"
            ),

            TemplateError::InvalidName { name } => {
                write!(f, "invalid placeholder name `{name}`")
            }

            TemplateError::DuplicateName { name } => {
                write!(f, "placeholder `{name}` appears more than once")
            }
        }
    }
}

/// Splits message text into literal and placeholder pieces.
///
/// Adjacent literal text (including unescaped braces) is merged into a
/// single [`Piece::Literal`].
pub fn parse_template(text: &str) -> Result<Vec<Piece>, TemplateError> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut names = HashSet::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    literal.push('{');
                    continue;
                }

                let mut inner = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    inner.push(c);
                }

                if !closed {
                    return Err(TemplateError::UnclosedBrace { offset });
                }

                let Some((name, kind)) = inner.split_once(':') else {
                    return Err(TemplateError::MissingKind { placeholder: inner });
                };

                let name = name.trim();
                if !is_valid_name(name) {
                    return Err(TemplateError::InvalidName {
                        name: name.to_string(),
                    });
                }

                let Some(kind) = Kind::parse(kind.trim()) else {
                    return Err(TemplateError::UnknownKind {
                        name: name.to_string(),
                        kind: kind.trim().to_string(),
                    });
                };

                if !names.insert(name.to_string()) {
                    return Err(TemplateError::DuplicateName {
                        name: name.to_string(),
                    });
                }

                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Hole {
                    name: name.to_string(),
                    kind,
                });
            }

            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_some() {
                    literal.push('}');
                } else {
                    return Err(TemplateError::UnmatchedClose { offset });
                }
            }

            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }

    Ok(pieces)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
