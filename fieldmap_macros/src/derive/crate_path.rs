//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[fieldmap(crate = "...")]` attribute value into
//! the tokens generated code uses to reach the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `fieldmap` when no override is present.
///
/// ```rust,ignore
/// assert_eq!(resolve(None).to_string(), "fieldmap");
/// ```
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { fieldmap }, |path| quote! { #path })
}
