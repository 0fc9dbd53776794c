//! Test: A minimal catalog compiles and renders

use errcat::{Catalog, ErrorCatalog, MessageBuffer};

#[derive(Clone, Copy, Debug, ErrorCatalog)]
#[catalog(prefix = "APP")]
enum AppError {
    #[message(code = 1, "configuration missing")]
    ConfigMissing = 1,

    #[fallback]
    #[message(code = 99, "unknown error {id:int}")]
    Unknown = 2,
}

fn main() {
    let mut buf = MessageBuffer::new();
    let text = errcat::formatter::format_with::<AppError>(&mut buf, AppError::ConfigMissing, &[]);
    assert_eq!(text, "APP-001: configuration missing");
    assert_eq!(AppError::max_id(), 2);
}
