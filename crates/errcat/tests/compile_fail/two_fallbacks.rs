//! Test: Only one entry can be the fallback

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown = 1,

    #[fallback]
    #[message(code = 2, "also unknown {id:int}")]
    AlsoUnknown = 2,
}

fn main() {}
