//! `switchbind` binds prefixed command line switches onto the fields of a configuration struct.
//!
//! Many programs take their configuration as a flat run of switches, such as `/Target web /Replicas 3 /DryRun`.
//! `switchbind` maps each switch onto the field of the same name, converting its values into the field's type.
//! There is no runtime reflection: the fields of a configuration type are registered at compile time, either by `#[derive(Switches)]` or by hand.
//! `switchbind` is designed around the following concerns:
//! * *Type safe value conversion*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Field shape decides the syntax*:
//! A boolean field is a flag, a single-value field takes one value, and a collection field takes a run of values.
//! * *Initials, not defaults*:
//! Fields not mentioned on the Cli keep whatever value they held before the bind.
//! * *Detailed yet basic UX*:
//! Errors name the offending switch and point at the offending token.
//!
//! # Usage
//! This page includes a few demos on using `switchbind`.
//! More demos are outlined in [the source](https://github.com/switchbind/switchbind/tree/main/demos).
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/deploy.rs")]
//! ```
//!
//! ```console
//! $ deploy /Target web /Hosts a.internal b.internal /Strategy BlueGreen /Replicas 3 /DryRun
//! (dry run)
//! Deploying 'web' x3 via Swap onto ["a.internal", "b.internal"].
//!
//! $ deploy /Replicas many
//! Bind error: Invalid value for switch 'Replicas': 'many' cannot convert to u16: invalid digit found in string.
//! /Replicas many
//!           ^
//!
//! $ deploy /Strategy Canary
//! Bind error: Invalid value for switch 'Strategy': 'Canary' is not a member of deploy::Strategy (expected one of: Rolling, BlueGreen, Recreate).
//! /Strategy Canary
//!           ^
//! ```
//!
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/manual_catalog.rs")]
//! ```
//!
//! # Builder Api
//! Implement [`Switches`] on the configuration type by building a [`Catalog`].
//! Each entry maps a switch name onto one field, via a *binding* which captures an accessor `fn(&mut C) -> &mut F` for the field.
//!
//! ### Bindings
//! * [`Switch`]: a boolean field (any [Toggle](./prelude/trait.Toggle.html), such as `bool` or `Option<bool>`).
//! The switch alone sets the field to `true`; it takes no value.
//! * [`Scalar`]: a single-value field.
//! The switch takes precisely one value, which overwrites the field.
//! * [`Optional`]: a single-value field that maps down to `Option<T>`.
//! The switch takes precisely one value, which is stored as `Some(..)`.
//! * [`Collection`]: a multi-value field (any [Collectable](./prelude/trait.Collectable.html)).
//! The switch takes every following token up to the next switch, appending them to the field.
//! `switchbind` provides `Collectable` implementations for `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `Box<[T]>`, `HashSet<T>`, `BTreeSet<T>`, and `Option<..>` of these.
//!
//! ### Values
//! Each value token is converted via [`Coerce`], which declares one [`Strategy`] per type:
//! * Enumerations select a member by its exact name (see `#[derive(Enumeration)]`).
//! * Structured types parse the token strictly, reporting the parser's own message on failure (ex: numbers, `bool`, IP addresses).
//! * Free-form types are constructed from any token (ex: `PathBuf`).
//! * `String` takes the token verbatim.
//!
//! Register your own types with [`coerce!`] (`parse:` for `FromStr` types, `construct:` for `From<String>` types).
//!
//! ### Initials
//! `switchbind` never resets a field.
//! Fields keep their initial value unless their switch appears on the Cli.
//! In the case of `Collection` fields, the initial contents are kept, and each occurrence of the switch *adds to* them.
//!
//! # Cli Semantics
//! [`SwitchBinder::bind`] scans the tokens once, left to right, according to the following rules.
//! * Every switch position must hold a token starting with the prefix (`/` by default), followed by the exact (case-sensitive) name of a field.
//! * A boolean switch takes no value.
//! For example, `/DryRun /Target web` sets `dry_run` and then binds `web` onto `target`.
//! * A single-value switch takes precisely the next token.
//! Repeating the switch overwrites the earlier value.
//! * A collection switch takes every following token up to the next token starting with the prefix.
//! For example, `/Hosts a b /DryRun /Hosts c` binds `[a, b, c]` onto `hosts`.
//! * A value switch immediately followed by another switch is an error.
//! * A value switch as the very last token is accepted, and leaves its field untouched.
//!
//! The first error stops the bind.
//! Fields bound by earlier switches keep their new values.
//!
//! ### Field-Cardinality Interaction
//! ```console
//! Binding           | Cardinality | Syntax                 | Description
//! ---------------------------------------------------------------------------------------------
//! Switch<B>         | [0]         | /NAME                  | precisely 0
//! Scalar<T>         | [1]         | /NAME VALUE            | precisely 1; overwritten
//! Optional<T>       | [1]         | /NAME VALUE            | precisely 1; stored as Some
//! Collection<C<T>>  | [1, ∞)      | /NAME VALUE [...]      | at least 1; captured greedily, appended
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit debug level [`tracing`](https://docs.rs/tracing) events for the catalog and each bound switch.
pub mod derive;
pub use switchbind_builder::*;
