//! trybuild coverage for `#[fieldmap(crate = "...")]` support.
//!
//! Ensures that generated code compiles when the runtime crate is reached
//! through an alias.

#[test]
fn crate_path_alias_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
}
