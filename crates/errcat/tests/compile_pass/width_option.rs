//! Test: Custom display-code width

use errcat::{Catalog, ErrorCatalog};

#[derive(Clone, Copy, PartialEq, Debug, ErrorCatalog)]
#[catalog(prefix = "ORA", width = 5)]
enum OraError {
    #[message(code = 1017, "invalid username/password; logon denied")]
    InvalidLogon = 1,

    #[fallback]
    #[message(code = 99999, "unrecognized error {id:int}")]
    Unrecognized = 2,
}

fn main() {
    assert_eq!(OraError::InvalidLogon.code(), "ORA-01017");
    assert_eq!(OraError::from_code(1017), Some(OraError::InvalidLogon));
    assert_eq!(errcat::recognize::<OraError>("ORA-01017: invalid"), Some(OraError::InvalidLogon));
}
