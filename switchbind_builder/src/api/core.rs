use std::env;
use std::ffi::OsString;

use crate::api::Switches;
use crate::constant::DEFAULT_PREFIX;
use crate::model::Prefix;
use crate::parser::{report, BindError, ConfigError, ConsoleInterface, Parser, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The switch binder: walks the tokens, binding each switch onto the matching field of the destination.
///
/// ### Example
/// ```
/// # use switchbind_builder as switchbind;
/// use switchbind::{BindError, Catalog, Scalar, SwitchBinder, Switches};
///
/// #[derive(Default)]
/// struct Config {
///     count: u32,
/// }
///
/// impl Switches for Config {
///     fn catalog() -> Result<Catalog<Self>, BindError> {
///         Catalog::new().add("Count", Scalar::new(|c: &mut Config| &mut c.count))
///     }
/// }
///
/// let mut config = Config::default();
/// SwitchBinder::default()
///     .bind(&["/Count", "42"], &mut config)
///     .unwrap();
/// assert_eq!(config.count, 42);
///
/// SwitchBinder::default()
///     .bind(&[], &mut config)
///     .unwrap();
/// assert_eq!(config.count, 42);
/// ```
#[derive(Debug, Clone)]
pub struct SwitchBinder {
    prefix: Prefix,
}

impl Default for SwitchBinder {
    fn default() -> Self {
        Self {
            prefix: Prefix::new(DEFAULT_PREFIX)
                .expect("internal error - default prefix is non-empty"),
        }
    }
}

impl SwitchBinder {
    /// Create a switch binder which recognizes switches by `prefix`.
    /// The prefix must not be empty.
    ///
    /// ### Example
    /// ```
    /// # use switchbind_builder as switchbind;
    /// use switchbind::SwitchBinder;
    ///
    /// assert_eq!(SwitchBinder::with_prefix("--").unwrap().prefix(), "--");
    /// assert!(SwitchBinder::with_prefix("").is_err());
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            prefix: Prefix::new(prefix)?,
        })
    }

    /// Change the switch prefix.
    /// If the prefix is empty, the error is returned immediately and the current prefix is kept.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> Result<(), ConfigError> {
        self.prefix = Prefix::new(prefix)?;
        Ok(())
    }

    /// The switch prefix.
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Bind the input tokens onto the fields of `destination`.
    ///
    /// The tokens are scanned once, left to right:
    /// * Every switch position must hold a token starting with the prefix, naming a field of `destination`.
    /// * A boolean switch sets its field, consuming no value.
    /// * A scalar switch consumes precisely the one following token.
    /// * A collection switch consumes every following token up to the next switch, appending them to the field.
    /// * A non-boolean switch followed by another switch is an error.
    /// * A non-boolean switch as the final token is accepted, and leaves its field untouched.
    ///
    /// The first error aborts the bind.
    /// Fields assigned before the error remain assigned.
    pub fn bind<C: Switches>(&self, tokens: &[&str], destination: &mut C) -> Result<(), BindError> {
        let catalog = C::catalog()?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Binding {} token(s) with prefix '{}' across {} switch(es).",
                tokens.len(),
                self.prefix.as_str(),
                catalog.len()
            );
        }

        Parser::new(&self.prefix, catalog).consume(tokens, destination)
    }

    /// Bind the input tokens onto the fields of `destination`, reporting any failure.
    ///
    /// If the bind fails, the error and the offending token are printed (to stderr) and `Err(1)` is returned.
    pub fn bind_tokens<C: Switches>(&self, tokens: &[&str], destination: &mut C) -> Result<(), i32> {
        self.bind_with_interface(tokens, destination, &ConsoleInterface::default())
    }

    /// Bind the Cli [`env::args_os`] (excluding the program name) onto the fields of `destination`.
    /// Arguments which are not valid unicode are converted lossily (see [`std::ffi::OsStr::to_string_lossy`]).
    ///
    /// If the bind fails, the error and the offending token are printed (to stderr) and the process exits with code `1` (via [`std::process::exit`]).
    pub fn bind_env<C: Switches>(&self, destination: &mut C) {
        let command_input = lossy_arguments(env::args_os().skip(1));

        if let Err(code) = self.bind_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            destination,
        ) {
            std::process::exit(code);
        }
    }

    pub(crate) fn for_switches<C: Switches>(
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Self, i32> {
        Self::with_prefix(C::PREFIX)
            .map_err(|error| report(&BindError::from(error), &[], user_interface))
    }

    fn bind_with_interface<C: Switches>(
        &self,
        tokens: &[&str],
        destination: &mut C,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), i32> {
        self.bind(tokens, destination)
            .map_err(|error| report(&error, tokens, user_interface))
    }
}

fn lossy_arguments(arguments: impl Iterator<Item = OsString>) -> Vec<String> {
    arguments
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}
