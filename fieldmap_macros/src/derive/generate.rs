//! Token generation for `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Index;
use syn::ext::IdentExt;

use super::ReflectInput;
use super::crate_path;

/// Generate the `Typed`, `Reflect` and `Struct` impls for a parsed struct.
///
/// The field table is emitted once as a hidden associated constant so both
/// `Typed::type_info` and `Struct::fields` hand out the same `'static` slice.
pub(crate) fn generate(input: &ReflectInput) -> TokenStream {
    let krate = crate_path::resolve(input.crate_path.as_ref());
    let ident = &input.ident;
    let descriptors = descriptor_tokens(input, &krate);
    let (by_ref, by_mut): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let index = Index::from(position);
            let name = &field.ident;
            (
                quote! { #index => ::core::option::Option::Some(&self.#name) },
                quote! { #index => ::core::option::Option::Some(&mut self.#name) },
            )
        })
        .unzip();

    quote! {
        impl #ident {
            #[doc(hidden)]
            const __FIELDMAP_FIELDS: &'static [#krate::FieldDescriptor] = &[#(#descriptors),*];
        }

        impl #krate::Typed for #ident {
            fn type_info() -> #krate::TypeInfo {
                #krate::TypeInfo::of::<Self>(#krate::Kind::Struct(Self::__FIELDMAP_FIELDS))
            }
        }

        impl #krate::Reflect for #ident {
            fn represented_type(&self) -> #krate::TypeInfo {
                <Self as #krate::Typed>::type_info()
            }

            fn reflect_ref(&self) -> #krate::ReflectRef<'_> {
                #krate::ReflectRef::Struct(self)
            }

            fn reflect_mut(&mut self) -> #krate::ReflectMut<'_> {
                #krate::ReflectMut::Struct(self)
            }

            fn try_assign(&mut self, source: &dyn #krate::Reflect) -> bool {
                #krate::reflect::assign_cloned(self, source)
            }
        }

        impl #krate::Struct for #ident {
            fn fields(&self) -> &'static [#krate::FieldDescriptor] {
                Self::__FIELDMAP_FIELDS
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #krate::Reflect> {
                match index {
                    #(#by_ref,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #krate::Reflect> {
                match index {
                    #(#by_mut,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn descriptor_tokens(input: &ReflectInput, krate: &TokenStream) -> Vec<TokenStream> {
    input
        .fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let name = field.ident.unraw().to_string();
            let index = Index::from(position);
            let embed = field.embed;
            let ty = &field.ty;
            quote! {
                #krate::FieldDescriptor::new(
                    #name,
                    #index,
                    #embed,
                    <#ty as #krate::Typed>::type_info,
                )
            }
        })
        .collect()
}
