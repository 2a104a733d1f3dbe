mod attribute;
mod catalog;
mod enumeration;
mod field;

use crate::model::IntermediateAttributes;

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

/// Gather the attributes named `path`, merging repeated occurrences.
fn gather_attributes(
    attributes: &[syn::Attribute],
    path: &str,
) -> Result<IntermediateAttributes, syn::Error> {
    let mut gathered = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident(path) {
            let IntermediateAttributes { singletons, pairs } =
                IntermediateAttributes::try_from(attribute)?;
            gathered.singletons.extend(singletons);

            for (key, values) in pairs {
                gathered.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    Ok(gathered)
}

/// Check that only the `allowed` keys appear in the attributes.
fn restrict_attributes(
    attributes: &IntermediateAttributes,
    span: proc_macro2::Span,
    path: &str,
    allowed: &[&str],
) -> Result<(), syn::Error> {
    let mut keys: Vec<&String> = attributes
        .singletons
        .iter()
        .chain(attributes.pairs.keys())
        .collect();
    keys.sort();

    match keys.into_iter().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(syn::Error::new(
            span,
            format!("Invalid - unknown attribute `#[{path}({key})]`."),
        )),
        None => Ok(()),
    }
}

/// The single string literal assigned to the attribute pair `key`, if any.
fn string_pair(
    attributes: &IntermediateAttributes,
    span: proc_macro2::Span,
    path: &str,
    key: &str,
) -> Result<Option<String>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => {
            let literal: syn::LitStr = syn::parse2(value.tokens.clone()).map_err(|_| {
                syn::Error::new(
                    span,
                    format!("Invalid - `#[{path}({key} = ..)]` expects a string literal."),
                )
            })?;
            Ok(Some(literal.value()))
        }
        Some(_) => Err(syn::Error::new(
            span,
            format!("Invalid - `#[{path}({key} = ..)]` may only be specified once."),
        )),
    }
}
