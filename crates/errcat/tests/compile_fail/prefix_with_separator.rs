//! Test: Prefixes cannot contain the code separator

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP-X")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown = 1,
}

fn main() {}
