//! Localizable message rendering and help assembly.
//!
//! This crate turns parse results into user-facing text:
//!
//! - [`SentenceBuilder`] — the swappable table mapping every
//!   [`ParseError`](verbline_core::ParseError) kind and the structural
//!   headings to display strings. [`DefaultSentenceBuilder`] is the
//!   English table.
//! - [`HelpAssembler`] — combines a registry and optional errors into a
//!   verb index or a per-verb usage/option document.
//!
//! # Example
//!
//! ```
//! use verbline_core::*;
//! use verbline_parse::parse;
//! use verbline_text::HelpAssembler;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     VerbSpec::new("add")
//!         .with_help("Add file contents to the index.")
//!         .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str).required()),
//! )?;
//!
//! let outcome = parse(["add"], &registry);
//! let text = HelpAssembler::new()
//!     .with_heading("Myapp 2.0.0-beta")
//!     .build_help(&registry, Some("add"), &outcome.failure_errors().unwrap_or_default());
//! assert!(text.contains("Required option 'file' is missing."));
//! # Ok::<(), RegistryError>(())
//! ```

mod help;
mod sentence;

pub use help::HelpAssembler;
pub use sentence::{DefaultSentenceBuilder, SentenceBuilder};
