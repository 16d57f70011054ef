//! `#[derive(IntoValue)]` implementation
//!
//! The derive parses the struct with `syn`, collects the fields that are not
//! skipped, and generates a `From<T> for Value` impl with `quote`.
//!
//! # Code Generation Example
//!
//! Input:
//! ```ignore
//! #[derive(IntoValue)]
//! struct Point {
//!     x: f64,
//!     #[typson(rename = "y-axis")]
//!     y: f64,
//! }
//! ```
//!
//! Generated output:
//! ```ignore
//! impl ::core::convert::From<Point> for ::typson_core::Value {
//!     fn from(value: Point) -> Self {
//!         let mut record = ::typson_core::Record::new();
//!         record.insert(String::from("x"), Into::<::typson_core::Value>::into(value.x));
//!         record.insert(String::from("y-axis"), Into::<::typson_core::Value>::into(value.y));
//!         ::typson_core::Value::Record(record)
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse_quote, Attribute, Data, DeriveInput, Fields, Index, LitStr, Path, Result, WherePredicate,
};

/// Options from `#[typson(...)]` on a field
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

fn field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("typson")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(name.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
            }
        })?;
    }
    Ok(parsed)
}

/// Path to the typson-core crate, overridable with `#[typson(crate = "...")]`
fn crate_path(attrs: &[Attribute]) -> Result<Path> {
    let mut path: Path = parse_quote!(::typson_core);
    for attr in attrs.iter().filter(|a| a.path().is_ident("typson")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute, expected `crate`"))
            }
        })?;
    }
    Ok(path)
}

pub fn into_value_impl(input: DeriveInput) -> Result<TokenStream> {
    let krate = crate_path(&input.attrs)?;
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "IntoValue can only be derived for structs",
            ))
        }
    };

    let mut kept = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        let attrs = field_attrs(&field.attrs)?;
        if !attrs.skip {
            kept.push((position, field, attrs.rename));
        }
    }

    let body = match fields {
        Fields::Named(_) => {
            let mut inserts = Vec::new();
            for (_, field, rename) in &kept {
                let ident = field.ident.as_ref().ok_or_else(|| {
                    syn::Error::new_spanned(field, "named field without an identifier")
                })?;
                let key = rename.clone().unwrap_or_else(|| ident.to_string());
                inserts.push(quote! {
                    record.insert(
                        ::std::string::String::from(#key),
                        ::core::convert::Into::<#krate::Value>::into(value.#ident),
                    );
                });
            }
            quote! {
                #[allow(unused_mut)]
                let mut record = #krate::Record::new();
                #(#inserts)*
                #krate::Value::Record(record)
            }
        }
        Fields::Unnamed(_) => {
            let items = kept.iter().map(|(position, _, _)| {
                let index = Index::from(*position);
                quote! { ::core::convert::Into::<#krate::Value>::into(value.#index) }
            });
            quote! {
                #krate::Value::Array(::std::vec![#(#items),*])
            }
        }
        Fields::Unit => {
            quote! {
                let _ = value;
                #krate::Value::Record(#krate::Record::new())
            }
        }
    };

    // generic field types need an explicit conversion bound
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for (_, field, _) in &kept {
            let ty = &field.ty;
            let predicate: WherePredicate =
                parse_quote!(#ty: ::core::convert::Into<#krate::Value>);
            where_clause.predicates.push(predicate);
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::core::convert::From<#name #ty_generics> for #krate::Value #where_clause {
            #[allow(unused_variables)]
            fn from(value: #name #ty_generics) -> Self {
                #body
            }
        }
    })
}
