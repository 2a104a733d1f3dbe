use crate::load::{gather_attributes, restrict_attributes, string_pair};
use crate::model::{DeriveCatalog, DeriveField};
use crate::{ATTRIBUTE_SWITCHES, MACRO_SWITCHES};

impl TryFrom<syn::DeriveInput> for DeriveCatalog {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = &value.ident;
        let attributes = gather_attributes(&value.attrs, ATTRIBUTE_SWITCHES)?;
        restrict_attributes(
            &attributes,
            struct_name.span(),
            ATTRIBUTE_SWITCHES,
            &["prefix"],
        )?;
        let prefix = string_pair(&attributes, struct_name.span(), ATTRIBUTE_SWITCHES, "prefix")?;

        if prefix.as_deref() == Some("") {
            return Err(syn::Error::new(
                struct_name.span(),
                "Invalid - switch prefix must not be empty.",
            ));
        }

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_SWITCHES} does not apply to generic data structures."),
            ));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let fields = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        .map(DeriveField::load)
                        .filter_map(Result::transpose)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct {
                        fields: syn::Fields::Unit,
                        ..
                    } => Vec::default(),
                    syn::DataStruct { .. } => {
                        return Err(syn::Error::new(
                            struct_name.span(),
                            format!("Invalid - {MACRO_SWITCHES} only applies to structs with named fields."),
                        ))
                    }
                };

                Ok(DeriveCatalog {
                    struct_name: struct_name.clone(),
                    prefix,
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_SWITCHES} only applies to 'struct' data structures."),
            )),
        }
    }
}
