use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveCatalog;

impl From<DeriveCatalog> for TokenStream2 {
    fn from(value: DeriveCatalog) -> Self {
        let DeriveCatalog {
            struct_name,
            prefix,
            fields,
        } = value;
        let prefix = prefix.map(|prefix| {
            quote! {
                const PREFIX: &'static str = #prefix;
            }
        });
        let fields = fields.into_iter().map(TokenStream2::from);

        quote! {
            impl ::switchbind::Switches for #struct_name {
                #prefix
                fn catalog() -> ::core::result::Result<::switchbind::Catalog<Self>, ::switchbind::BindError> {
                    let catalog = ::switchbind::Catalog::<Self>::new();
                    #( #fields )*
                    ::core::result::Result::Ok(catalog)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveField, FieldType};
    use crate::test::{ident, simple_format};

    #[test]
    fn render_derive_catalog_empty() {
        // Setup
        let catalog = DeriveCatalog {
            struct_name: ident("my_struct"),
            prefix: None,
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(catalog);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: switchbind :: Switches for my_struct {
 fn catalog () -> :: core :: result :: Result < :: switchbind :: Catalog < Self > , :: switchbind :: BindError > {
 let catalog = :: switchbind :: Catalog :: < Self > :: new () ;
 :: core :: result :: Result :: Ok (catalog) }
 }
"#,
        );
    }

    #[test]
    fn render_derive_catalog() {
        // Setup
        let catalog = DeriveCatalog {
            struct_name: ident("my_struct"),
            prefix: Some("--".to_string()),
            fields: vec![
                DeriveField {
                    field_name: ident("verbose"),
                    switch_name: "verbose".to_string(),
                    field_type: FieldType::Switch,
                },
                DeriveField {
                    field_name: ident("count"),
                    switch_name: "Count".to_string(),
                    field_type: FieldType::Scalar,
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::from(catalog);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: switchbind :: Switches for my_struct {
 const PREFIX : & 'static str = "--" ;
 fn catalog () -> :: core :: result :: Result < :: switchbind :: Catalog < Self > , :: switchbind :: BindError > {
 let catalog = :: switchbind :: Catalog :: < Self > :: new () ;
 let catalog = catalog . add ("verbose" , :: switchbind :: Switch :: new (| target : & mut Self | & mut target . verbose)) ? ;
 let catalog = catalog . add ("Count" , :: switchbind :: Scalar :: new (| target : & mut Self | & mut target . count)) ? ;
 :: core :: result :: Result :: Ok (catalog) }
 }
"#,
        );
    }
}
