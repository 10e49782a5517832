use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Error};

use crate::utils;

/// Main entry point for the Tag derive macro.
pub(crate) fn derive_tag(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_tag_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_tag_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    utils::reject_lifetimes(&input.generics, "Tag")?;
    let name = &input.ident;
    let name_str = name.to_string();
    let crate_path = utils::parse_crate_path(&input.attrs)?;
    let generics = utils::bounded_generics(&input.generics, None, &crate_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_path::Tag for #name #ty_generics #where_clause {
            const FAMILY: #crate_path::Family = #crate_path::Family::new(
                ::core::concat!(::core::module_path!(), "::", #name_str),
                ::core::concat!(
                    ::core::file!(),
                    ":",
                    ::core::line!(),
                    ":",
                    ::core::column!(),
                ),
            );
        }

        impl #impl_generics #crate_path::Tags for #name #ty_generics #where_clause {
            const TOKENS: &'static [#crate_path::TypeToken] =
                &[<Self as #crate_path::Tag>::TOKEN];
        }
    })
}
