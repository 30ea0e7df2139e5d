use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, LitStr,
    Meta, Type,
};

/// Derive macro describing the columns of a CSV input record.
///
/// Each named field becomes one column:
/// - name: the field name, or `#[serde(rename = "...")]` when present
/// - required: false for `Option<T>` fields
/// - description: the field's doc comment
///
/// Generates `csv_schema() -> &'static [CsvField]` and
/// `csv_header() -> &'static [&'static str]`. `CsvField` must be in scope
/// where the derive is used.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct Column {
    name: String,
    required: bool,
    description: String,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "CsvSchema requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "CsvSchema only supports structs",
            ))
        }
    };

    let columns = fields.iter().map(column).collect::<syn::Result<Vec<_>>>()?;

    let names = columns.iter().map(|c| &c.name);
    let entries = columns.iter().map(
        |Column {
             name,
             required,
             description,
         }| {
            quote! {
                CsvField {
                    name: #name,
                    required: #required,
                    description: #description,
                }
            }
        },
    );

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn csv_schema() -> &'static [CsvField] {
                const SCHEMA: &[CsvField] = &[#(#entries),*];
                SCHEMA
            }

            pub fn csv_header() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    })
}

fn column(field: &Field) -> syn::Result<Column> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "CsvSchema field must be named"))?;

    Ok(Column {
        name: serde_rename(&field.attrs)?.unwrap_or_else(|| ident.to_string()),
        required: !is_option(&field.ty),
        description: doc_text(&field.attrs),
    })
}

fn serde_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(syn::Token![=]) {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let _nested;
                syn::parenthesized!(_nested in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(rename)
}

fn doc_text(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_owned()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
