use crate::load::{gather_attributes, incompatible_error, restrict_attributes, string_pair};
use crate::model::{DeriveField, FieldType};
use crate::ATTRIBUTE_SWITCH;
use quote::ToTokens;

const COLLECTIONS: [&str; 5] = ["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

/// The shape inferred from a field's type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inferred {
    Boolean,
    Collection,
    Optional,
    Scalar,
    OptionalCollection,
}

impl DeriveField {
    /// Load the switch for `value`, or `None` when the field is not a switch (not `pub`, or `#[switch(skip)]`).
    pub fn load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - switches must be named fields.",
                ))
            }
        };
        let attributes = gather_attributes(&value.attrs, ATTRIBUTE_SWITCH)?;
        restrict_attributes(
            &attributes,
            field_name.span(),
            ATTRIBUTE_SWITCH,
            &["name", "skip", "collection", "scalar"],
        )?;
        let switch_name = string_pair(&attributes, field_name.span(), ATTRIBUTE_SWITCH, "name")?;
        let explicit_skip = attributes.singletons.contains("skip");
        let explicit_collection = attributes.singletons.contains("collection");
        let explicit_scalar = attributes.singletons.contains("scalar");

        if explicit_collection && explicit_scalar {
            return Err(incompatible_error(
                &field_name,
                "#[switch(collection)]",
                "#[switch(scalar)]",
            ));
        }

        if explicit_skip {
            for (explicit, name) in [
                (switch_name.is_some(), "#[switch(name = ..)]"),
                (explicit_collection, "#[switch(collection)]"),
                (explicit_scalar, "#[switch(scalar)]"),
            ] {
                if explicit {
                    return Err(incompatible_error(&field_name, "#[switch(skip)]", name));
                }
            }

            return Ok(None);
        }

        if !matches!(value.vis, syn::Visibility::Public(_)) {
            return Ok(None);
        }

        let inferred = infer(&value.ty)?;
        let field_type = match (inferred, explicit_collection, explicit_scalar) {
            (Inferred::Optional | Inferred::OptionalCollection, _, true) => FieldType::Optional,
            (_, _, true) => FieldType::Scalar,
            (_, true, _) => FieldType::Collection,
            (Inferred::Boolean, _, _) => FieldType::Switch,
            (Inferred::Collection | Inferred::OptionalCollection, _, _) => FieldType::Collection,
            (Inferred::Optional, _, _) => FieldType::Optional,
            (Inferred::Scalar, _, _) => FieldType::Scalar,
        };

        Ok(Some(DeriveField {
            switch_name: switch_name.unwrap_or_else(|| field_name.to_string()),
            field_name,
            field_type,
        }))
    }
}

fn infer(ty: &syn::Type) -> Result<Inferred, syn::Error> {
    match ty {
        syn::Type::Paren(paren) => infer(&paren.elem),
        syn::Type::Group(group) => infer(&group.elem),
        syn::Type::Path(path) if path.qself.is_none() => match path.path.segments.last() {
            Some(segment) => {
                let ident = segment.ident.to_string();

                for argument in type_arguments(segment) {
                    if !matches!(argument, syn::Type::Slice(_)) {
                        infer(argument)?;
                    }
                }

                match (ident.as_str(), single_argument(segment)) {
                    ("bool", None) => Ok(Inferred::Boolean),
                    ("Option", Some(inner)) => match infer(inner)? {
                        Inferred::Boolean => Ok(Inferred::Boolean),
                        Inferred::Collection => Ok(Inferred::OptionalCollection),
                        _ => Ok(Inferred::Optional),
                    },
                    ("Box", Some(syn::Type::Slice(_))) => Ok(Inferred::Collection),
                    (collection, Some(_)) if COLLECTIONS.contains(&collection) => {
                        Ok(Inferred::Collection)
                    }
                    _ => Ok(Inferred::Scalar),
                }
            }
            None => Err(unsupported(ty)),
        },
        _ => Err(unsupported(ty)),
    }
}

/// The first generic type argument of `segment` (ex: `T` in `Vec<T>`).
fn single_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    type_arguments(segment).into_iter().next()
}

fn type_arguments(segment: &syn::PathSegment) -> Vec<&syn::Type> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) => arguments
            .args
            .iter()
            .filter_map(|argument| match argument {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::default(),
    }
}

fn unsupported(ty: &syn::Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        format!(
            "Invalid - unsupported field type `{}`: no conversion from switch values exists.",
            ty.to_token_stream()
        ),
    )
}
