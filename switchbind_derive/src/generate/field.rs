use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveField, FieldType};

impl From<DeriveField> for TokenStream2 {
    fn from(value: DeriveField) -> Self {
        let DeriveField {
            field_name,
            switch_name,
            field_type,
        } = value;
        let binding = match field_type {
            FieldType::Collection => quote! { ::switchbind::Collection },
            FieldType::Optional => quote! { ::switchbind::Optional },
            FieldType::Scalar => quote! { ::switchbind::Scalar },
            FieldType::Switch => quote! { ::switchbind::Switch },
        };

        quote! {
            let catalog = catalog.add(#switch_name, #binding::new(|target: &mut Self| &mut target.#field_name))?;
        }
    }
}
