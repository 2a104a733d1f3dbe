//! Builder module for `switchbind`.
//! See [documentation root](https://docs.rs/switchbind/latest/switchbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod coerce;
mod collection;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use coerce::*;
pub use constant::DEFAULT_PREFIX;
pub use model::*;
pub use parser::{BindError, ConfigError, ErrorContext};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
