//! Test: Every entry needs an explicit identifier

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown,
}

fn main() {}
