//! Expansion of `#[derive(Reflect)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) use generate::generate;
pub(crate) use parse::{ReflectInput, parse_input};

/// Parse `input` and generate the reflection impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input)?;
    Ok(generate(&parsed))
}
