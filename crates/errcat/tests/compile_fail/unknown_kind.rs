//! Test: Placeholder kinds are int, uint, str or substr

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[fallback]
    #[message(code = 1, "unknown error {id:int}")]
    Unknown = 1,

    #[message(code = 2, "ratio {x:float} out of range")]
    BadRatio = 2,
}

fn main() {}
