//! Derive Api for `switchbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a configuration struct `S` with `#[derive(Switches)]`.
//! This will implement [`Switches`](../trait.Switches.html) for `S`, so that `S::from_env()` and `S::from_tokens(..)` bind the Cli switches onto a default `S`.
//! `switchbind` infers the binding of each field from its type.
//!
//! ```no_run
#![doc = include_str!("../demos/dashed.rs")]
//! ```
//!
//! ```console
//! $ dashed --output out.tar --include a b --exclude '*.tmp' --force
//! Writing "out.tar" (force: true).
//!   + "a"
//!   + "b"
//!   - *.tmp
//! Compression level: 6
//! ```
//!
//! ### Switches Configuration
//! Only `pub` named fields are switches; other fields are left alone.
//! The implicit inference uses the following rules:
//! ```console
//! Type                     | Binding
//! -----------------------------------------------
//! bool                     | Switch::new(..)
//! Option<bool>             | Switch::new(..)
//! Vec<T>                   | Collection::new(..)
//! VecDeque<T>              | Collection::new(..)
//! LinkedList<T>            | Collection::new(..)
//! HashSet<T>               | Collection::new(..)
//! BTreeSet<T>              | Collection::new(..)
//! Box<[T]>                 | Collection::new(..)
//! Option<Vec<T>> (etc)     | Collection::new(..)
//! Option<T>                | Optional::new(..)
//! T                        | Scalar::new(..)
//! ```
//!
//! Fixed length arrays, references, tuples, pointers, functions, and trait objects cannot be converted from a switch value, and are rejected at compile time.
//!
//! Notice, these implicit rules do not capture all possible configurations.
//! Therefore, we provide the following explicit field attributes:
//! * `#[switch(name = "..")]` to use a switch name other than the field name.
//! Names are exact and case-sensitive.
//! A name used twice surfaces as [`BindError::DuplicateFieldName`](../enum.BindError.html#variant.DuplicateFieldName) when binding.
//! * `#[switch(skip)]` to exclude a `pub` field.
//! * `#[switch(collection)]` or `#[switch(scalar)]` to explicitly use `Collection::new(..)` or `Scalar::new(..)`, respectively.
//! This is useful for custom [Collectable](../prelude/trait.Collectable.html) types, or to bind a `bool` from an explicit `true`/`false` value.
//!
//! The struct may be configured with the container attribute `#[switches(prefix = "..")]`, which sets [`Switches::PREFIX`](../trait.Switches.html#associatedconstant.PREFIX).
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, Switches)]
//! #[switches(prefix = "-")]
//! struct Config {
//!     pub verbose: bool,
//!     // the above generates:
//!     //  .add("verbose", Switch::new(|target: &mut Self| &mut target.verbose))?
//!
//!     #[switch(name = "Count")]
//!     pub count: u32,
//!     // the above generates:
//!     //  .add("Count", Scalar::new(|target: &mut Self| &mut target.count))?
//!
//!     #[switch(collection)]
//!     pub pairs: Pairs<usize>,
//!     // the above generates:
//!     //  .add("pairs", Collection::new(|target: &mut Self| &mut target.pairs))?
//!     // assumes: `impl<T> Collectable for Pairs<T>`
//!
//!     #[switch(skip)]
//!     pub cache: Cache,
//!     // the above is not a switch
//!
//!     seen: usize,
//!     // the above is not a switch
//! }
//! ```
//!
//! ### Enumerations
//! Instrument a unit-only enum with `#[derive(Enumeration)]` to select its variants by name.
//! The variants may be configured with `#[switch(name = "..")]`, to use a member name other than the variant name.
//!
//! For example:
//! ```ignore
//! #[derive(Enumeration)]
//! enum Level {
//!     Low,
//!     // the above is selected by "Low"
//!
//!     #[switch(name = "hi")]
//!     High,
//!     // the above is selected by "hi"
//! }
//! ```

pub use switchbind_derive::*;
