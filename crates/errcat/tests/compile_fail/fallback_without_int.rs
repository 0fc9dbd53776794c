//! Test: The fallback message takes exactly one int

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:str}")]
    Unknown = 1,
}

fn main() {}
