use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Error, Generics, Type};

/// Parse the crate path from attributes, defaulting to `::fieldtags`.
///
/// Looks for `#[fieldtags(crate = "...")]` attribute and uses the specified crate path.
///
/// # Examples
///
/// ```ignore
/// #[derive(Record)]
/// #[fieldtags(crate = "crate")]
/// struct MyRecord;
/// ```
pub(crate) fn parse_crate_path(attrs: &[Attribute]) -> Result<TokenStream2, Error> {
    for attr in attrs {
        if !attr.path().is_ident("fieldtags") {
            continue;
        }

        let mut result = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit_str: syn::LitStr = meta.value()?.parse()?;
                result = Some(syn::parse_str(&lit_str.value())?);

                Ok(())
            } else {
                Err(meta.error("unsupported `fieldtags` attribute, expected `crate`"))
            }
        })?;

        if let Some(path) = result {
            return Ok(path);
        }
    }

    Ok(quote! { ::fieldtags })
}

/// Reject lifetime parameters. Reflected types are `'static`.
pub(crate) fn reject_lifetimes(generics: &Generics, derive: &str) -> Result<(), Error> {
    match generics.lifetimes().next() {
        Some(lifetime) => Err(Error::new_spanned(
            lifetime,
            format!("{derive} derive macro does not support lifetime parameters"),
        )),
        None => Ok(()),
    }
}

/// Clone `generics`, bounding every type parameter by `'static` and every type in `reflected` by
/// `Reflect`.
pub(crate) fn bounded_generics<'a>(
    generics: &Generics,
    reflected: impl IntoIterator<Item = &'a Type>,
    crate_path: &TokenStream2,
) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause.predicates.push(syn::parse_quote! { #param: 'static });
    }
    for ty in reflected {
        where_clause
            .predicates
            .push(syn::parse_quote! { #ty: #crate_path::Reflect });
    }

    generics
}
