//! Input parsing for the `Reflect` derive macro.
//!
//! This module gathers the struct identifier, its reflected fields and the
//! attribute metadata in one pass so expansion can fail fast with useful
//! errors.

use syn::{Data, DeriveInput, Fields};

use super::{ReflectField, ReflectInput, parse_field_attrs, parse_struct_attrs};

/// Gathers information from the user-provided struct.
///
/// Enums, unions, tuple structs, unit structs and generic structs are
/// rejected. Fields marked `#[fieldmap(skip)]` are dropped here, so the
/// remaining fields are numbered by their position among reflected fields.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ReflectInput> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Reflect requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            if attrs.embed {
                return Err(syn::Error::new_spanned(
                    field,
                    "a field cannot be both `skip` and `embed`",
                ));
            }
            continue;
        }
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Reflect requires named fields"));
        };
        fields.push(ReflectField {
            ident: field_ident,
            ty: field.ty.clone(),
            embed: attrs.embed,
        });
    }
    Ok(ReflectInput {
        ident,
        fields,
        crate_path: struct_attrs.crate_path,
    })
}
