//! Procedural macros for `fieldmap`.
//!
//! `#[derive(Reflect)]` describes a struct with named fields to the mapper:
//! it emits a static field descriptor table together with by-index field
//! accessors, so lookups by name never need runtime type introspection.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `fieldmap::Reflect`.
///
/// Field attributes:
/// - `#[fieldmap(embed)]` marks an embedded member whose fields are promoted
///   into the enclosing struct for name lookups.
/// - `#[fieldmap(skip)]` hides a field from the mapper; it keeps its default.
///
/// Struct attributes:
/// - `#[fieldmap(crate = "path")]` overrides the path generated code uses to
///   reach the `fieldmap` crate.
///
/// The struct must also implement `Clone` and `Default`.
#[proc_macro_derive(Reflect, attributes(fieldmap))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
