//! Verb registry with fail-fast registration validation.
//!
//! A [`SchemaRegistry`] is built once at startup from [`VerbSpec`]
//! declarations and treated as read-only for the rest of the process.
//! Structural faults in a declaration (duplicate tokens, duplicate option
//! names, more than one positional collector) are programmer errors and are
//! rejected at registration time rather than deferred to end users.

use thiserror::Error;

use serde::{Deserialize, Serialize};

use crate::spec::VerbSpec;

/// Registration and lookup errors.
///
/// These are configuration-time faults, not user input faults; they carry
/// `Display` messages via [`thiserror`] instead of going through the
/// localizable sentence table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A verb with the same token (case-insensitive) is already registered.
    #[error("duplicate verb token: {0}")]
    DuplicateVerb(String),
    /// No verb with the given token is registered.
    #[error("unknown verb token: {0}")]
    UnknownVerb(String),
    /// Verb token is empty or whitespace-only.
    #[error("verb token cannot be empty")]
    EmptyVerbToken,
    /// An option under the named verb has an empty long name.
    #[error("option long name cannot be empty in verb: {0}")]
    EmptyOptionName(String),
    /// Two options under the same verb share a short or long name.
    #[error("duplicate option name in verb {verb}: {name}")]
    DuplicateOption { verb: String, name: String },
    /// More than one option under the same verb collects positional values.
    #[error("more than one positional collector in verb: {0}")]
    MultiplePositionalCollectors(String),
}

/// Immutable-after-construction mapping from verb token to [`VerbSpec`].
///
/// Complete all [`register`](SchemaRegistry::register) calls before the
/// first parse; afterwards the registry is shared by reference and never
/// mutated, so concurrent parses from multiple threads are safe.
///
/// # Examples
///
/// ```
/// use verbline_core::{OptionSpec, SchemaRegistry, ValueKind, VerbSpec};
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     VerbSpec::new("add")
///         .with_help("Add file contents to the index.")
///         .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str).required()),
/// )?;
///
/// assert!(registry.lookup("ADD").is_ok());
/// assert!(registry.lookup("push").is_err());
/// # Ok::<(), verbline_core::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    verbs: Vec<VerbSpec>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a verb, validating its declaration.
    ///
    /// Fails with [`RegistryError::DuplicateVerb`] when the token is already
    /// present (case-insensitive), and with the other variants for
    /// structural faults inside the verb itself.
    pub fn register(&mut self, verb: VerbSpec) -> Result<(), RegistryError> {
        if verb.token.trim().is_empty() {
            return Err(RegistryError::EmptyVerbToken);
        }
        if self.find(&verb.token).is_some() {
            return Err(RegistryError::DuplicateVerb(verb.token));
        }
        validate_options(&verb)?;
        self.verbs.push(verb);
        Ok(())
    }

    /// Looks up a verb by token, case-insensitively.
    pub fn lookup(&self, token: &str) -> Result<&VerbSpec, RegistryError> {
        self.find(token)
            .ok_or_else(|| RegistryError::UnknownVerb(token.to_string()))
    }

    /// Non-failing lookup.
    pub fn find(&self, token: &str) -> Option<&VerbSpec> {
        self.verbs
            .iter()
            .find(|v| v.token.eq_ignore_ascii_case(token))
    }

    /// All verbs in registration order.
    pub fn verbs(&self) -> &[VerbSpec] {
        &self.verbs
    }

    /// Verbs marked as default, in registration order.
    pub fn default_verbs(&self) -> impl Iterator<Item = &VerbSpec> {
        self.verbs.iter().filter(|v| v.is_default)
    }
}

fn validate_options(verb: &VerbSpec) -> Result<(), RegistryError> {
    let mut seen: Vec<String> = Vec::new();
    let mut collectors = 0usize;

    for option in &verb.options {
        if option.long.trim().is_empty() {
            return Err(RegistryError::EmptyOptionName(verb.token.clone()));
        }

        let long = option.long.to_ascii_lowercase();
        if seen.contains(&long) {
            return Err(RegistryError::DuplicateOption {
                verb: verb.token.clone(),
                name: option.long.clone(),
            });
        }
        seen.push(long);

        if let Some(short) = option.short {
            let short = short.to_ascii_lowercase().to_string();
            if seen.contains(&short) {
                return Err(RegistryError::DuplicateOption {
                    verb: verb.token.clone(),
                    name: short,
                });
            }
            seen.push(short);
        }

        if option.default_positional {
            collectors += 1;
            if collectors > 1 {
                return Err(RegistryError::MultiplePositionalCollectors(
                    verb.token.clone(),
                ));
            }
        }
    }

    Ok(())
}
