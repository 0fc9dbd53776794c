//! Catalog descriptions for documentation and tooling.
//!
//! [`describe`] lists every entry of a catalog with its identifier, display
//! code, message text and argument list. With the `serde` feature the
//! description serializes to JSON:
//!
//! ```json
//! {
//!   "prefix": "NJS",
//!   "max_id": 49,
//!   "entries": [
//!     { "id": 4, "code": "NJS-004", "text": "invalid value for property {property:str}",
//!       "placeholders": [{ "name": "property", "kind": "str" }], "fallback": false }
//!   ]
//! }
//! ```

use std::fmt::{self, Display, Formatter};

use crate::catalog::Catalog;
use crate::template::Placeholder;

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    /// Stable identifier.
    pub id: i32,

    /// Display code, e.g. `NJS-004`.
    pub code: &'static str,

    /// Message text as declared.
    pub text: &'static str,

    /// Arguments the message takes, in order.
    pub placeholders: Vec<Placeholder>,

    /// Whether this entry is rendered for unknown identifiers.
    pub fallback: bool,
}

/// Every entry of one catalog, in identifier order.
///
/// # Display Output
///
/// ```text
/// Error catalog NJS (49 entries):
/// --------------------------------------------------
///    1  NJS-001  expected callback as last parameter
///    2  NJS-002  invalid pool
/// ...
///   48  NJS-068  invalid error number {id:int} supplied  [fallback]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogDescription {
    prefix: &'static str,
    max_id: i32,
    entries: Vec<CatalogEntry>,
}

impl CatalogDescription {
    /// The catalog's display-code prefix.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The largest valid identifier.
    pub fn max_id(&self) -> i32 {
        self.max_id
    }

    /// All entries.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: i32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Looks up an entry by display code, e.g. `"NJS-040"`.
    pub fn by_code(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

impl Display for CatalogDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Error catalog {} ({} entries):",
            self.prefix,
            self.entries.len()
        )?;
        writeln!(f, "{}", "-".repeat(50))?;

        let id_width = self.max_id.to_string().len().max(2);
        let code_width = self
            .entries
            .iter()
            .map(|entry| entry.code.len())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            write!(
                f,
                "  {:>id_width$}  {:<code_width$}  {}",
                entry.id, entry.code, entry.text,
            )?;
            if entry.fallback {
                write!(f, "  [fallback]")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Describes every entry of catalog `C`.
pub fn describe<C: Catalog>() -> CatalogDescription {
    let fallback = C::FALLBACK.id();

    let entries = C::ALL
        .iter()
        .map(|&entry| {
            let template = entry.template();
            CatalogEntry {
                id: template.id(),
                code: template.code(),
                text: template.text(),
                placeholders: template.placeholders().copied().collect(),
                fallback: template.id() == fallback,
            }
        })
        .collect();

    CatalogDescription {
        prefix: C::PREFIX,
        max_id: C::max_id(),
        entries,
    }
}
