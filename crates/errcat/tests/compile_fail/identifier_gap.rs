//! Test: Identifiers must run 1, 2, ..., N without gaps

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown = 1,

    #[message(code = 2, "skipped an identifier")]
    Skipped = 3,
}

fn main() {}
