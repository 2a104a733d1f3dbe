use thiserror::Error;

use crate::model::FieldKind;

/// Behaviour to bind value tokens onto one field of the destination `C`.
///
/// We use this at the bottom of the catalog so the compiler can maintain each field's type, while the catalog works across all of them.
pub trait Binding<C> {
    /// The field's shape, deciding how many tokens the switch consumes.
    fn kind(&self) -> FieldKind;

    /// The declared type of the field.
    fn type_name(&self) -> &'static str;

    /// Bind the value tokens onto the field of `target`.
    /// `values` is empty for a [`FieldKind::Boolean`], has precisely one token for a [`FieldKind::Scalar`], and at least one for a [`FieldKind::Collection`].
    /// A [`FieldKind::Scalar`] or [`FieldKind::Collection`] bound without values is left untouched.
    ///
    /// On failure, reports the index (within `values`) of the rejected token.
    fn bind(&self, target: &mut C, values: &[&str]) -> Result<(), (usize, InvalidCoercion)>;
}

/// A token that could not be coerced into its target type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCoercion {
    /// The token does not name a member of the enumeration.
    #[error("'{token}' is not a member of {type_name} (expected one of: {}).", .members.join(", "))]
    InvalidEnumValue {
        /// The rejected token.
        token: String,
        /// The enumeration type.
        type_name: &'static str,
        /// The accepted member names.
        members: &'static [&'static str],
    },

    /// The type's own conversion rejected the token.
    #[error("cannot convert '{token}' to {type_name}: {message}.")]
    ValueConversion {
        /// The rejected token.
        token: String,
        /// The target type.
        type_name: &'static str,
        /// The conversion's own explanation.
        message: String,
    },

    /// The type offers no conversion from text.
    #[error("no conversion from text to {type_name}.")]
    UnsupportedType {
        /// The target type.
        type_name: &'static str,
    },
}
