mod macros;

use proc_macro::TokenStream;

/// Implements `apis_validators::Fields` and `apis_validators::Value` for a struct.
///
/// Fields opt into validation with `#[validate("Directive[,option...]")]`.
/// Reported names follow `#[serde(rename = "...")]` and the container's
/// `#[serde(rename_all = "...")]`.
#[proc_macro_derive(Validate, attributes(validate, serde))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    macros::validate::expand(input.into()).into()
}
