use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Field, Fields, Ident, ItemStruct, Lit, LitStr, Meta, Path, Token,
    parse_macro_input, parse_quote, parse_str, punctuated::Punctuated,
};

/// Options accepted by `#[base_entity(...)]`.
struct BaseEntityArgs {
    name: Option<LitStr>,
    traits_path: Path,
    id_field: Ident,
    created_at_field: Ident,
    updated_at_field: Ident,
}

impl Default for BaseEntityArgs {
    fn default() -> Self {
        let span = proc_macro2::Span::call_site();
        Self {
            name: None,
            traits_path: parse_str("crate::db::dao::base_traits")
                .expect("default traits path should parse"),
            id_field: Ident::new("id", span),
            created_at_field: Ident::new("created_at", span),
            updated_at_field: Ident::new("updated_at", span),
        }
    }
}

/// Adds the `id`, `created_at` and `updated_at` columns shared by every table
/// and implements the DAO traits for the generated `ActiveModel` and `Entity`.
///
/// `name = "User"` sets the label used in not-found errors; without it the
/// `table_name` from `#[sea_orm(...)]` is used.
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut input = parse_macro_input!(item as ItemStruct);
    let table_name = table_name(&input);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "base_entity requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();

    let id_ident = &args.id_field;
    let created_ident = &args.created_at_field;
    let updated_ident = &args.updated_at_field;
    let shared: [(&Ident, Field); 3] = [
        (
            id_ident,
            parse_quote! {
                #[sea_orm(primary_key, auto_increment = false)]
                pub #id_ident: uuid::Uuid
            },
        ),
        (
            created_ident,
            parse_quote! {
                #[sea_orm(default_expr = "Expr::current_timestamp()")]
                pub #created_ident: sea_orm::entity::prelude::DateTimeWithTimeZone
            },
        ),
        (
            updated_ident,
            parse_quote! {
                #[sea_orm(default_expr = "Expr::current_timestamp()")]
                pub #updated_ident: sea_orm::entity::prelude::DateTimeWithTimeZone
            },
        ),
    ];

    let mut new_fields: Punctuated<Field, Token![,]> = Punctuated::new();
    for (ident, field) in shared {
        if !existing.contains(&ident.to_string()) {
            new_fields.push(field);
        }
    }
    new_fields.extend(fields.named.iter().cloned());
    fields.named = new_fields;

    let name = args
        .name
        .map(|lit| lit.value())
        .or(table_name)
        .unwrap_or_else(|| "Record".to_string());
    let traits_path = args.traits_path;

    let expanded = quote! {
        #input

        impl #traits_path::HasIdActiveModel for ActiveModel {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.#id_ident = sea_orm::ActiveValue::Set(id);
            }
        }

        impl #traits_path::TimestampedActiveModel for ActiveModel {
            fn set_created_at(
                &mut self,
                ts: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.#created_ident = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(
                &mut self,
                ts: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.#updated_ident = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl #traits_path::HasCreatedAtColumn for Entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }
        }

        impl #traits_path::NamedEntity for Entity {
            const NAME: &'static str = #name;
        }
    };

    expanded.into()
}

// Reads `#[sea_orm(table_name = "...")]` so unnamed entities still get a label.
fn table_name(input: &ItemStruct) -> Option<String> {
    input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("sea_orm"))
        .find_map(|attr| {
            let nested = attr
                .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                .ok()?;
            nested.into_iter().find_map(|meta| match meta {
                Meta::NameValue(nv) if nv.path.is_ident("table_name") => match nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit), ..
                    }) => Some(lit.value()),
                    _ => None,
                },
                _ => None,
            })
        })
}

fn parse_args(args: Punctuated<Meta, Token![,]>) -> Result<BaseEntityArgs, syn::Error> {
    let mut parsed = BaseEntityArgs::default();
    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. name = \"User\"",
            ));
        };

        let Some(ident) = name_value.path.get_ident().cloned() else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = match name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => lit_str,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        };

        match ident.to_string().as_str() {
            "name" => parsed.name = Some(value),
            "traits" => {
                parsed.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "id" => parsed.id_field = Ident::new(&value.value(), value.span()),
            "created_at" => parsed.created_at_field = Ident::new(&value.value(), value.span()),
            "updated_at" => parsed.updated_at_field = Ident::new(&value.value(), value.span()),
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "unknown base_entity attribute key",
                ));
            }
        }
    }

    Ok(parsed)
}
