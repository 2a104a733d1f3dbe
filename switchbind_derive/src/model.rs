use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Collection,
    Optional,
    Scalar,
    Switch,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub switch_name: String,
    pub field_type: FieldType,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveCatalog {
    pub struct_name: syn::Ident,
    pub prefix: Option<String>,
    pub fields: Vec<DeriveField>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveMember {
    pub variant_name: syn::Ident,
    pub member_name: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveEnumeration {
    pub enum_name: syn::Ident,
    pub members: Vec<DeriveMember>,
}
