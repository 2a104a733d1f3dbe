use std::collections::HashMap;

use crate::api::capture::{Binding, InvalidCoercion};
use crate::api::SwitchBinder;
use crate::constant::DEFAULT_PREFIX;
use crate::model::FieldKind;
use crate::parser::{BindError, ConsoleInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A configuration type whose fields may be bound from switches.
///
/// Implement by hand (via [`Catalog`]), or derive via `#[derive(Switches)]`.
///
/// ### Example
/// ```
/// # use switchbind_builder as switchbind;
/// use switchbind::{BindError, Catalog, Collection, Scalar, Switch, Switches};
///
/// #[derive(Debug, Default)]
/// struct Config {
///     verbose: bool,
///     count: u32,
///     tags: Vec<String>,
/// }
///
/// impl Switches for Config {
///     fn catalog() -> Result<Catalog<Self>, BindError> {
///         Catalog::new()
///             .add("Verbose", Switch::new(|c: &mut Config| &mut c.verbose))?
///             .add("Count", Scalar::new(|c: &mut Config| &mut c.count))?
///             .add("Tags", Collection::new(|c: &mut Config| &mut c.tags))
///     }
/// }
///
/// let config = Config::from_tokens(&["/Tags", "a", "b", "/Count", "2", "/Tags", "c"]).unwrap();
/// assert_eq!(config.count, 2);
/// assert_eq!(config.tags, vec!["a", "b", "c"]);
/// assert!(!config.verbose);
/// ```
pub trait Switches: Sized {
    /// The switch prefix used by [`Switches::from_tokens`] and [`Switches::from_env`].
    const PREFIX: &'static str = DEFAULT_PREFIX;

    /// Build the switch lookup for this type.
    /// Called once per bind; never cached.
    fn catalog() -> Result<Catalog<Self>, BindError>;

    /// Bind the tokens onto a default constructed `Self`, using [`Switches::PREFIX`].
    fn from_tokens(tokens: &[&str]) -> Result<Self, BindError>
    where
        Self: Default,
    {
        let mut destination = Self::default();
        SwitchBinder::with_prefix(Self::PREFIX)?.bind(tokens, &mut destination)?;
        Ok(destination)
    }

    /// Bind the Cli [`std::env::args`] onto a default constructed `Self`, using [`Switches::PREFIX`].
    ///
    /// If [`Switches::PREFIX`] is empty, or the bind fails, the error is printed (to stderr) and the process exits with code `1` (via [`std::process::exit`]).
    fn from_env() -> Self
    where
        Self: Default,
    {
        let binder = match SwitchBinder::for_switches::<Self>(&ConsoleInterface::default()) {
            Ok(binder) => binder,
            Err(code) => std::process::exit(code),
        };
        let mut destination = Self::default();
        binder.bind_env(&mut destination);
        destination
    }
}

/// The metadata and binding of one switch.
pub struct FieldDescriptor<C> {
    name: String,
    binding: Box<dyn Binding<C>>,
}

impl<C> FieldDescriptor<C> {
    /// The switch name (without prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's shape.
    pub fn kind(&self) -> FieldKind {
        self.binding.kind()
    }

    /// The declared type of the field.
    pub fn type_name(&self) -> &'static str {
        self.binding.type_name()
    }

    pub(crate) fn bind(
        &self,
        target: &mut C,
        values: &[&str],
    ) -> Result<(), (usize, InvalidCoercion)> {
        self.binding.bind(target, values)
    }
}

impl<C> std::fmt::Debug for FieldDescriptor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field[{name}, {kind}, {t}]",
            name = self.name,
            kind = self.kind(),
            t = self.type_name(),
        )
    }
}

/// The lookup from switch name to field, for the configuration type `C`.
pub struct Catalog<C> {
    fields: HashMap<String, FieldDescriptor<C>>,
}

impl<C> Default for Catalog<C> {
    fn default() -> Self {
        Self {
            fields: HashMap::default(),
        }
    }
}

impl<C> std::fmt::Debug for Catalog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<&FieldDescriptor<C>> = self.fields.values().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        f.debug_struct("Catalog").field("fields", &fields).finish()
    }
}

impl<C> Catalog<C> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the field bound by `binding` under the switch `name` (exact, case-sensitive).
    ///
    /// ### Example
    /// ```
    /// # use switchbind_builder as switchbind;
    /// use switchbind::{BindError, Catalog, Scalar};
    ///
    /// struct Config {
    ///     count: u32,
    /// }
    ///
    /// let catalog = Catalog::new()
    ///     .add("Count", Scalar::new(|c: &mut Config| &mut c.count))
    ///     .unwrap();
    /// let error = catalog
    ///     .add("Count", Scalar::new(|c: &mut Config| &mut c.count))
    ///     .unwrap_err();
    ///
    /// assert_eq!(error, BindError::DuplicateFieldName { name: "Count".to_string() });
    /// ```
    pub fn add<B>(mut self, name: impl Into<String>, binding: B) -> Result<Self, BindError>
    where
        B: Binding<C> + 'static,
    {
        let name = name.into();

        if self.fields.contains_key(&name) {
            return Err(BindError::DuplicateFieldName { name });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registering switch '{name}' as {} ({}).",
                binding.kind(),
                binding.type_name()
            );
        }

        self.fields.insert(
            name.clone(),
            FieldDescriptor {
                name,
                binding: Box::new(binding),
            },
        );
        Ok(self)
    }

    /// Look up the field registered under the switch `name`.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<C>> {
        self.fields.get(name)
    }

    /// The registered switch names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// The number of registered switches.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no switches are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
