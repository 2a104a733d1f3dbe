use crate::load::{gather_attributes, restrict_attributes, string_pair};
use crate::model::{DeriveEnumeration, DeriveMember};
use crate::{ATTRIBUTE_SWITCH, MACRO_ENUMERATION};
use std::collections::HashSet;

impl TryFrom<syn::DeriveInput> for DeriveEnumeration {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_ENUMERATION} does not apply to generic data structures."),
            ));
        }

        match &value.data {
            syn::Data::Enum(de) => {
                let members = de
                    .variants
                    .iter()
                    .map(DeriveMember::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                let mut seen = HashSet::new();

                for member in &members {
                    if !seen.insert(member.member_name.as_str()) {
                        return Err(syn::Error::new(
                            member.variant_name.span(),
                            format!(
                                "Invalid - duplicate member name '{}'.",
                                member.member_name
                            ),
                        ));
                    }
                }

                Ok(DeriveEnumeration {
                    enum_name: enum_name.clone(),
                    members,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_ENUMERATION} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveMember {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - {MACRO_ENUMERATION} only applies to unit variants."),
            ));
        }

        let attributes = gather_attributes(&value.attrs, ATTRIBUTE_SWITCH)?;
        restrict_attributes(&attributes, variant_name.span(), ATTRIBUTE_SWITCH, &["name"])?;
        let member_name = string_pair(&attributes, variant_name.span(), ATTRIBUTE_SWITCH, "name")?
            .unwrap_or_else(|| variant_name.to_string());

        Ok(DeriveMember {
            variant_name,
            member_name,
        })
    }
}
