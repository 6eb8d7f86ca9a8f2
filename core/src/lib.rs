//! Core schema types and error taxonomy for verb-based command lines.
//!
//! This crate defines the foundational types for declaring and consuming
//! verb-oriented argument schemas:
//!
//! - [`VerbSpec`] — a verb (subcommand) with its ordered option list.
//! - [`OptionSpec`] — a named, typed input under a verb (flag, valued, or
//!   sequence), with set/group membership and an optional value check.
//! - [`SchemaRegistry`] — the immutable-after-construction verb table,
//!   validated fail-fast at registration.
//! - [`ParseOutcome`] / [`BoundArgs`] / [`Value`] — results of one parse.
//! - [`ParseError`] — the closed taxonomy of parse-time faults.
//!
//! The tokenizer/binder lives in `verbline-parse`; message rendering and
//! help assembly live in `verbline-text`.
//!
//! # Example
//!
//! ```
//! use verbline_core::*;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     VerbSpec::new("add")
//!         .with_help("Add file contents to the index.")
//!         .with_option(
//!             OptionSpec::valued(Some('f'), "file", ValueKind::Str)
//!                 .required()
//!                 .with_help("Set file."),
//!         )
//!         .with_option(
//!             OptionSpec::flag(Some('v'), "verbose").with_help("Set output to verbose messages."),
//!         ),
//! )?;
//!
//! assert_eq!(registry.lookup("add")?.options.len(), 2);
//! # Ok::<(), RegistryError>(())
//! ```

mod error;
mod outcome;
mod registry;
mod spec;

pub use error::ParseError;
pub use outcome::{BoundArgs, ParseOutcome, Value};
pub use registry::{RegistryError, SchemaRegistry};
pub use spec::{OptionSpec, ValueCheck, ValueKind, VerbSpec};
