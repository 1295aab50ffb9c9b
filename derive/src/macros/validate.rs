use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Index, LitStr, Member, Token, parse_quote, parse2};

use super::rename::RenameRule;

/// Derive macro for `Fields` and `Value`.
///
/// Fields tagged `#[validate("-")]` are not listed by `fields()` but still
/// count toward the struct's zero value, so their types implement `Value`.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    match expand_struct(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

struct FieldSpec {
    member: Member,
    ident: String,
    json: Option<String>,
    tag: Option<LitStr>,
}

fn expand_struct(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Validate)] only supports structs",
        ));
    };

    let rename_all = container_rename_all(&input.attrs)?;

    let mut specs = Vec::new();
    let mut members = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let tag = validate_tag(&field.attrs)?;
        let (member, ident) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        members.push(member.clone());
        if tag.as_ref().is_some_and(|t| t.value() == "-") {
            continue;
        }

        let json = match field_rename(&field.attrs)? {
            Some(json) => Some(json),
            None if field.ident.is_some() => rename_all.map(|rule| rule.apply_to_field(&ident)),
            None => None,
        };

        specs.push(FieldSpec {
            member,
            ident,
            json,
            tag,
        });
    }

    let name = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::apis_validators::Value));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let entries = specs.iter().map(|spec| {
        let FieldSpec {
            member,
            ident,
            json,
            tag,
        } = spec;
        let json = match json {
            Some(json) => quote!(::std::option::Option::Some(#json)),
            None => quote!(::std::option::Option::None),
        };
        let tag = match tag {
            Some(tag) => quote!(::std::option::Option::Some(#tag)),
            None => quote!(::std::option::Option::None),
        };
        quote! {
            ::apis_validators::Field {
                ident: #ident,
                json: #json,
                tag: #tag,
                value: &self.#member,
            }
        }
    });

    let zero_checks = members
        .iter()
        .map(|member| quote!(::apis_validators::Value::is_zero(&self.#member)));

    Ok(quote! {
        impl #impl_generics ::apis_validators::Fields for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::apis_validators::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics ::apis_validators::Value for #name #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                true #(&& #zero_checks)*
            }

            fn as_fields(&self) -> ::std::option::Option<&dyn ::apis_validators::Fields> {
                ::std::option::Option::Some(self)
            }
        }
    })
}

/// The string literal of the field's `#[validate("...")]`, if present.
fn validate_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag: Option<LitStr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("validate")) {
        if tag.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[validate] attribute; combine the directives into one tag",
            ));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(tag)
}

/// The serialized name from `#[serde(rename = "...")]` or
/// `#[serde(rename(serialize = "..."))]`.
fn field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(lit) = serialize_value(&meta)? {
                    rename = Some(lit.value());
                }
                Ok(())
            } else {
                skip_meta(&meta)
            }
        })?;
    }
    Ok(rename)
}

fn container_rename_all(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rule = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                if let Some(lit) = serialize_value(&meta)? {
                    rule = Some(RenameRule::parse(&lit.value()).ok_or_else(|| {
                        syn::Error::new_spanned(&lit, "unknown rename_all rule")
                    })?);
                }
                Ok(())
            } else {
                skip_meta(&meta)
            }
        })?;
    }
    Ok(rule)
}

/// Reads `key = "..."` or the `serialize` half of `key(serialize = "...")`.
fn serialize_value(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    let mut value = None;
    meta.parse_nested_meta(|inner| {
        let lit: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("serialize") {
            value = Some(lit);
        }
        Ok(())
    })?;
    Ok(value)
}

fn skip_meta(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}
