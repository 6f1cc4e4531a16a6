//! Parsing utilities for the `Reflect` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, Type};

mod input;
mod literals;

pub(crate) use input::parse_input;
use literals::lit_str;

/// Struct-level `#[fieldmap(...)]` metadata.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[fieldmap(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `fieldmap::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Reflect)]`.
///
/// - `embed` promotes the member's own fields into name lookups.
/// - `skip` removes the field from the descriptor table.
#[derive(Default, Clone, Copy)]
pub(crate) struct FieldAttrs {
    pub embed: bool,
    pub skip: bool,
}

/// Parsed struct ready for code generation.
pub(crate) struct ReflectInput {
    pub ident: Ident,
    pub fields: Vec<ReflectField>,
    pub crate_path: Option<syn::Path>,
}

/// One reflected field, in declaration order.
pub(crate) struct ReflectField {
    pub ident: Ident,
    pub ty: Type,
    pub embed: bool,
}

/// Iterate all `#[fieldmap(...)]` attributes once and apply a callback.
fn parse_fieldmap<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("fieldmap")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, scope: &str) -> syn::Error {
    meta.error(format!("unrecognised fieldmap {scope} attribute"))
}

/// Extracts `#[fieldmap(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised; any other key is a compile error.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_fieldmap(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(unknown_key(meta, "struct"))
        }
    })?;
    Ok(out)
}

/// Extracts `#[fieldmap(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_fieldmap(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("embed") => out.embed = true,
            Some("skip") => out.skip = true,
            _ => return Err(unknown_key(meta, "field")),
        }
        Ok(())
    })?;
    Ok(out)
}
