use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveEnumeration, DeriveMember};

impl From<DeriveEnumeration> for TokenStream2 {
    fn from(value: DeriveEnumeration) -> Self {
        let DeriveEnumeration { enum_name, members } = value;
        let member_names: Vec<&String> = members.iter().map(|m| &m.member_name).collect();
        let selections = members.iter().map(
            |DeriveMember {
                 variant_name,
                 member_name,
             }| {
                quote! {
                    #member_name => ::core::option::Option::Some(Self::#variant_name),
                }
            },
        );

        quote! {
            impl ::switchbind::Coerce for #enum_name {
                fn strategy() -> ::switchbind::Strategy<Self> {
                    ::switchbind::Strategy::Enumeration {
                        members: &[#( #member_names ),*],
                        select: |token| match token {
                            #( #selections )*
                            _ => ::core::option::Option::None,
                        },
                    }
                }
            }
        }
    }
}
