//! Tokenizer, binder, and exclusive-set resolver.
//!
//! This crate turns a raw argument vector into a
//! [`ParseOutcome`](verbline_core::ParseOutcome) against a read-only
//! [`SchemaRegistry`](verbline_core::SchemaRegistry):
//!
//! - [`Parser`] — walks tokens left to right, coerces values, checks
//!   arity, requiredness, repeats, groups, and exclusive sets.
//! - [`aggregate`] — folds raw `SetViolation` errors into grouped
//!   [`SetConflict`] reports for rendering, in discovery order.
//!
//! Parsing is synchronous, single-threaded per invocation, and pure: the
//! registry is shared by reference and never mutated, so concurrent parse
//! calls from multiple threads are safe once registration is complete.
//!
//! # Example
//!
//! ```
//! use verbline_core::*;
//! use verbline_parse::parse;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     VerbSpec::new("add")
//!         .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str).required())
//!         .with_option(OptionSpec::flag(Some('v'), "verbose")),
//! )?;
//!
//! match parse(["add", "-f", "a.txt", "-v"], &registry) {
//!     ParseOutcome::Bound(bound) => assert!(bound.flag("verbose")),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! # Ok::<(), RegistryError>(())
//! ```

mod aggregate;
mod binder;
mod token;

pub use aggregate::{AggregatedError, SetConflict, aggregate};
pub use binder::{Parser, ParserSettings};

use verbline_core::{ParseOutcome, SchemaRegistry};

/// Parses an argument vector with default settings.
///
/// Callers pass the process's argument list minus the program name.
pub fn parse<I, S>(args: I, registry: &SchemaRegistry) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new(registry).parse(args)
}
