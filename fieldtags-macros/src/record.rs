use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Type};

use crate::utils;

/// Main entry point for the Record derive macro.
pub(crate) fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_record_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_record_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Record derive macro only supports structs, not enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Record derive macro only supports structs, not unions",
            ));
        }
    };
    utils::reject_lifetimes(&input.generics, "Record")?;

    let name = &input.ident;
    let crate_path = utils::parse_crate_path(&input.attrs)?;
    let field_types: Vec<&Type> = fields.iter().map(|field| &field.ty).collect();
    // Concrete field types are checked by the `convert` calls themselves.
    let reflected = if input.generics.params.is_empty() {
        Vec::new()
    } else {
        field_types.clone()
    };
    let generics = utils::bounded_generics(&input.generics, reflected, &crate_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let dangling_check = generate_dangling_check(&input, field_types.last().copied(), &crate_path);

    Ok(quote! {
        impl #impl_generics #crate_path::Reflect for #name #ty_generics #where_clause {
            const TOKEN: #crate_path::TypeToken = #crate_path::TypeToken::of::<Self>();
        }

        impl #impl_generics #crate_path::Record for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn fill<__P: #crate_path::Placeholders>(
                placeholders: &mut __P,
            ) -> #crate_path::Result<()> {
                #(placeholders.convert::<#field_types>()?;)*

                ::core::result::Result::Ok(())
            }
        }

        #dangling_check
    })
}

/// A const item that fails to evaluate if the last field is an annotation marker.
///
/// The type of the last field of a generic record may depend on its parameters, so those are only
/// checked when described.
fn generate_dangling_check(
    input: &DeriveInput,
    last: Option<&Type>,
    crate_path: &TokenStream2,
) -> Option<TokenStream2> {
    if !input.generics.params.is_empty() {
        return None;
    }
    let last = last?;
    let message = format!(
        "the last field of `{}` is an annotation marker with no field to describe",
        input.ident,
    );

    Some(quote! {
        const _: () = {
            if <#last as #crate_path::Reflect>::TOKEN.is_annotation() {
                ::core::panic!(#message);
            }
        };
    })
}
