//! Compile-time tests for the ErrorCatalog derive macro.
//!
//! These tests verify that:
//! - Valid catalogs declared outside this crate compile and link against the
//!   generated `Catalog` impl
//! - Rejected catalogs produce a spanned error at the offending token
//!
//! Run with: cargo nextest run --package errcat trybuild

#[test]
fn compile_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/compile_pass/*.rs");
}

#[test]
fn compile_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
