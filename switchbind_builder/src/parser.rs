mod base;
mod interface;
mod printer;

pub(crate) use base::*;
pub(crate) use interface::*;
pub use printer::ErrorContext;

use thiserror::Error;

use crate::api::InvalidCoercion;

/// Error for an invalid binder configuration (ex: an empty switch prefix).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Error raised while binding tokens onto a destination.
///
/// Every error aborts the bind.
/// Fields assigned by switches preceding the failure remain assigned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A token in switch position does not start with the switch prefix.
    #[error("Invalid switch '{token}': expected a switch starting with '{prefix}'.")]
    InvalidSwitchToken {
        /// Position of the token.
        offset: usize,
        /// The offending token.
        token: String,
        /// The configured switch prefix.
        prefix: String,
    },

    /// The switch name does not match any field of the destination.
    #[error("Unknown switch '{name}'.")]
    UnknownSwitch {
        /// Position of the switch token.
        offset: usize,
        /// The switch name, without prefix.
        name: String,
    },

    /// A non-boolean switch is immediately followed by another switch.
    #[error("Expected a value for switch '{name}', found '{found}'.")]
    MissingSwitchValue {
        /// Position of the switch token.
        offset: usize,
        /// The switch name, without prefix.
        name: String,
        /// The switch token found in place of a value.
        found: String,
    },

    /// The value does not name a member of the target enumeration.
    #[error("Invalid value for switch '{name}': '{token}' is not a member of {type_name} (expected one of: {}).", .members.join(", "))]
    InvalidEnumValue {
        /// Position of the value token.
        offset: usize,
        /// The switch name, without prefix.
        name: String,
        /// The offending value.
        token: String,
        /// The enumeration type.
        type_name: &'static str,
        /// The accepted member names.
        members: &'static [&'static str],
    },

    /// The target type rejected the value.
    #[error("Invalid value for switch '{name}': '{token}' cannot convert to {type_name}: {message}.")]
    ValueConversionError {
        /// Position of the value token.
        offset: usize,
        /// The switch name, without prefix.
        name: String,
        /// The offending value.
        token: String,
        /// The target type.
        type_name: &'static str,
        /// The conversion's own explanation.
        message: String,
    },

    /// The target type offers no conversion from text.
    #[error("Unsupported field type for switch '{name}': no conversion from text to {type_name}.")]
    UnsupportedFieldType {
        /// Position of the value token.
        offset: usize,
        /// The switch name, without prefix.
        name: String,
        /// The target type.
        type_name: &'static str,
    },

    /// Two fields were registered under the same switch name.
    #[error("Duplicate field name '{name}'.")]
    DuplicateFieldName {
        /// The repeated switch name.
        name: String,
    },

    /// The binder could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BindError {
    pub(crate) fn coercion(offset: usize, name: impl Into<String>, error: InvalidCoercion) -> Self {
        let name = name.into();

        match error {
            InvalidCoercion::InvalidEnumValue {
                token,
                type_name,
                members,
            } => BindError::InvalidEnumValue {
                offset,
                name,
                token,
                type_name,
                members,
            },
            InvalidCoercion::ValueConversion {
                token,
                type_name,
                message,
            } => BindError::ValueConversionError {
                offset,
                name,
                token,
                type_name,
                message,
            },
            InvalidCoercion::UnsupportedType { type_name } => BindError::UnsupportedFieldType {
                offset,
                name,
                type_name,
            },
        }
    }

    /// The position of the offending token, when the error is tied to one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BindError::InvalidSwitchToken { offset, .. }
            | BindError::UnknownSwitch { offset, .. }
            | BindError::MissingSwitchValue { offset, .. }
            | BindError::InvalidEnumValue { offset, .. }
            | BindError::ValueConversionError { offset, .. }
            | BindError::UnsupportedFieldType { offset, .. } => Some(*offset),
            BindError::DuplicateFieldName { .. } | BindError::Config(_) => None,
        }
    }
}
