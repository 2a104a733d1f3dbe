use crate::parser::ConfigError;

/// The shape of a bindable field, which decides how many tokens its switch consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A toggle: the switch alone sets the field, consuming no value token.
    Boolean,
    /// Precisely one value token.
    Scalar,
    /// A greedy run of value tokens, appended to the existing contents.
    Collection {
        /// The type name of each collected element.
        element: &'static str,
    },
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Boolean => write!(f, "Boolean"),
            FieldKind::Scalar => write!(f, "Scalar"),
            FieldKind::Collection { element } => write!(f, "Collection<{element}>"),
        }
    }
}

/// A validated switch prefix: never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prefix(String);

impl Prefix {
    pub(crate) fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();

        if value.is_empty() {
            Err(ConfigError("switch prefix must not be empty.".to_string()))
        } else {
            Ok(Prefix(value))
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn introduces(&self, token: &str) -> bool {
        token.starts_with(&self.0)
    }

    pub(crate) fn strip<'t>(&self, token: &'t str) -> Option<&'t str> {
        token.strip_prefix(self.0.as_str())
    }
}
