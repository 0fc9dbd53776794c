//! Test: ErrorCatalog cannot be derived on structs

use errcat::ErrorCatalog;

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "APP")]
struct AppError;

fn main() {}
