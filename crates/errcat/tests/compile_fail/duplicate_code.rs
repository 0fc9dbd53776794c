//! Test: Display codes must be unique

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown = 1,

    #[message(code = 1, "same code again")]
    Again = 2,
}

fn main() {}
