//! Test: Every placeholder kind, escaped braces and a leading placeholder

use errcat::{Arg, Catalog, ErrorCatalog, MessageBuffer};

#[derive(Clone, Copy, ErrorCatalog)]
#[catalog(prefix = "KND", width = 2)]
enum Kinds {
    /// Documented variants are accepted.
    #[message(code = 1, "{count:uint} rows, offset {offset:int}, in {table:str} near \"{sql:substr}\"")]
    Everything = 1,

    #[message(code = 2, "literal {{braces}} survive")]
    Braces = 2,

    #[fallback]
    #[message(code = 3, "bad id {id:int}")]
    BadId = 3,
}

fn main() {
    let mut buf = MessageBuffer::new();
    let text = errcat::formatter::format_with::<Kinds>(
        &mut buf,
        Kinds::Everything,
        &[
            Arg::from(5u64),
            Arg::from(-1),
            Arg::from("users"),
            Arg::substr(b"select *", 6),
        ],
    );
    assert_eq!(text, "KND-01: 5 rows, offset -1, in users near \"select\"");

    let text = errcat::formatter::format_with::<Kinds>(&mut buf, Kinds::Braces, &[]);
    assert_eq!(text, "KND-02: literal {braces} survive");

    assert_eq!(i32::from(Kinds::BadId), 3);
    assert_eq!(Kinds::ALL.len(), 3);
}
