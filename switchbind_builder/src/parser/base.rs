use crate::api::{Catalog, FieldDescriptor};
use crate::model::{FieldKind, Prefix};
use crate::parser::BindError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The scanning half of a bind: walks the tokens once, left to right, dispatching each switch to its field.
pub(crate) struct Parser<'p, C> {
    prefix: &'p Prefix,
    catalog: Catalog<C>,
}

impl<'p, C> Parser<'p, C> {
    pub(crate) fn new(prefix: &'p Prefix, catalog: Catalog<C>) -> Self {
        Self { prefix, catalog }
    }

    pub(crate) fn consume(&self, tokens: &[&str], destination: &mut C) -> Result<(), BindError> {
        let mut offset: usize = 0;

        while offset < tokens.len() {
            let field = self.field(offset, tokens[offset])?;

            match field.kind() {
                FieldKind::Boolean => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Toggling switch '{}' at {offset}.", field.name());
                    }

                    bind(field, destination, offset + 1, &[])?;
                    offset += 1;
                    continue;
                }
                FieldKind::Scalar | FieldKind::Collection { .. } => {}
            }

            let start = offset + 1;

            match tokens.get(start) {
                None => {
                    // A trailing value switch is a no-op; the scan is over anyway.
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Switch '{}' at {offset} has no value; leaving it untouched.",
                            field.name()
                        );
                    }

                    break;
                }
                Some(next) if self.prefix.introduces(next) => {
                    return Err(BindError::MissingSwitchValue {
                        offset,
                        name: field.name().to_string(),
                        found: next.to_string(),
                    });
                }
                Some(_) => {}
            }

            let end = match field.kind() {
                FieldKind::Collection { .. } => tokens[start..]
                    .iter()
                    .position(|token| self.prefix.introduces(token))
                    .map_or(tokens.len(), |run| start + run),
                _ => start + 1,
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Switch '{}' at {offset} takes values {:?}.",
                    field.name(),
                    &tokens[start..end]
                );
            }

            bind(field, destination, start, &tokens[start..end])?;
            offset = end;
        }

        Ok(())
    }

    fn field(&self, offset: usize, token: &str) -> Result<&FieldDescriptor<C>, BindError> {
        let name = self
            .prefix
            .strip(token)
            .ok_or_else(|| BindError::InvalidSwitchToken {
                offset,
                token: token.to_string(),
                prefix: self.prefix.as_str().to_string(),
            })?;

        self.catalog
            .get(name)
            .ok_or_else(|| BindError::UnknownSwitch {
                offset,
                name: name.to_string(),
            })
    }
}

fn bind<C>(
    field: &FieldDescriptor<C>,
    destination: &mut C,
    start: usize,
    values: &[&str],
) -> Result<(), BindError> {
    field
        .bind(destination, values)
        .map_err(|(index, error)| BindError::coercion(start + index, field.name(), error))
}
