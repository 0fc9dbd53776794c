//! The catalog abstraction.
//!
//! A catalog is an enum whose variants are the diagnosable failure
//! conditions, implemented by `#[derive(ErrorCatalog)]`. Identifiers run
//! `1..=max_id()` without gaps; `0` is reserved for success.

use crate::template::Template;

/// Identifier meaning "no error". Never rendered as a failure.
pub const SUCCESS: i32 = 0;

/// An immutable table of message templates keyed by identifier.
///
/// Implement this with `#[derive(ErrorCatalog)]`; the derive checks at
/// compile time that identifiers are contiguous, that display codes are
/// unique and that the fallback entry takes a single `int` argument.
pub trait Catalog: Copy + 'static {
    /// Product prefix of every display code, e.g. `NJS`.
    const PREFIX: &'static str;

    /// The entry rendered when an unknown identifier is requested. Its
    /// template takes the offending identifier as its only argument.
    const FALLBACK: Self;

    /// Every entry, in identifier order.
    const ALL: &'static [Self];

    /// The stable identifier of this entry.
    fn id(self) -> i32;

    /// The entry for `id`, if `1 <= id <= max_id()`.
    fn from_id(id: i32) -> Option<Self>;

    /// The entry whose display code has the numeric part `code`
    /// (`68` for `NJS-068`).
    fn from_code(code: u32) -> Option<Self>;

    /// The template of this entry.
    fn template(self) -> &'static Template;

    /// The template for `id`, if `1 <= id <= max_id()`.
    fn lookup(id: i32) -> Option<&'static Template> {
        Self::from_id(id).map(Self::template)
    }

    /// The largest valid identifier.
    fn max_id() -> i32 {
        i32::try_from(Self::ALL.len()).unwrap_or(i32::MAX)
    }

    /// The display code of this entry, e.g. `NJS-002`.
    fn code(self) -> &'static str {
        self.template().code()
    }
}
