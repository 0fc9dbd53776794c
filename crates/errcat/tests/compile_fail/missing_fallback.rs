//! Test: One entry must be the fallback

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[message(code = 1, "configuration missing")]
    ConfigMissing = 1,
}

fn main() {}
