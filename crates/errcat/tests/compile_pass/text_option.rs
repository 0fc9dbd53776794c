//! Test: Message text given with `text = "..."`

use errcat::{Catalog, ErrorCatalog};

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "SVC")]
enum ServiceError {
    #[message(code = 10, text = "port {port:uint} already in use")]
    PortInUse = 1,

    #[fallback]
    #[message(text = "no such error {id:int}", code = 11)]
    NoSuchError = 2,
}

fn main() {
    assert_eq!(ServiceError::PortInUse.template().arity(), 1);
    assert_eq!(ServiceError::FALLBACK.code(), "SVC-011");
}
