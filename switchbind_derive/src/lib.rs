extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveCatalog, DeriveEnumeration};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

const MACRO_SWITCHES: &str = "Switches";
const MACRO_ENUMERATION: &str = "Enumeration";
const ATTRIBUTE_SWITCHES: &str = "switches";
const ATTRIBUTE_SWITCH: &str = "switch";

#[proc_macro_derive(Switches, attributes(switches, switch))]
pub fn switches(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveCatalog::try_from(derive_input) {
        Ok(catalog) => TokenStream2::from(catalog).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[proc_macro_derive(Enumeration, attributes(switch))]
pub fn enumeration(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveEnumeration::try_from(derive_input) {
        Ok(enumeration) => TokenStream2::from(enumeration).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
