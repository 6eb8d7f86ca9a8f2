//! The sentence table: error kinds and structural texts to display strings.
//!
//! [`SentenceBuilder`] is the swap point for locales: the trait's default
//! method bodies are the English table, and an implementation may override
//! any subset without touching the binder or the aggregator. The
//! error-kind mapping is an exhaustive `match` over
//! [`ParseError`], so an unmapped kind is a compile error, never a
//! silently skipped message.

use verbline_core::ParseError;
use verbline_parse::{AggregatedError, SetConflict};

/// Maps error kinds and structural headings to display text.
///
/// # Examples
///
/// Swapping a single sentence for another locale:
///
/// ```
/// use verbline_text::SentenceBuilder;
///
/// struct Japanese;
///
/// impl SentenceBuilder for Japanese {
///     fn errors_heading(&self) -> String {
///         "エラー:".to_string()
///     }
/// }
///
/// assert_eq!(Japanese.errors_heading(), "エラー:");
/// // Everything not overridden stays English.
/// assert_eq!(Japanese.usage_heading(), "USAGE:");
/// ```
pub trait SentenceBuilder {
    /// Marker prepended to required options in help tables.
    fn required_word(&self) -> String {
        "Required.".to_string()
    }

    /// Heading above the rendered error list.
    fn errors_heading(&self) -> String {
        "ERROR(S):".to_string()
    }

    /// Heading above the usage line.
    fn usage_heading(&self) -> String {
        "USAGE:".to_string()
    }

    /// Word used to label group membership in help tables.
    fn option_group_word(&self) -> String {
        "Group".to_string()
    }

    /// Help entry text; `is_option` selects the `--help` wording over the
    /// `help` verb wording.
    fn help_command_text(&self, is_option: bool) -> String {
        if is_option {
            "Display this help screen.".to_string()
        } else {
            "Display more information on a specific command.".to_string()
        }
    }

    /// Version entry text.
    fn version_command_text(&self, _is_option: bool) -> String {
        "Display version information.".to_string()
    }

    /// Renders one parse error.
    fn format_error(&self, error: &ParseError) -> String {
        match error {
            ParseError::BadToken { token } => format!("Token '{token}' is not recognized."),
            ParseError::MissingValue { name } => format!("Option '{name}' has no value."),
            ParseError::UnknownOption { token } => format!("Option '{token}' is unknown."),
            ParseError::MissingRequired { name: Some(name) } => {
                format!("Required option '{name}' is missing.")
            }
            ParseError::MissingRequired { name: None } => {
                "A required value not bound to option name is missing.".to_string()
            }
            ParseError::BadConversion { name: Some(name) } => {
                format!("Option '{name}' is defined with a bad format.")
            }
            ParseError::BadConversion { name: None } => {
                "A value not bound to option name is defined with a bad format.".to_string()
            }
            ParseError::SequenceOutOfRange { name: Some(name) } => {
                format!("A sequence option '{name}' is defined with fewer or more items than required.")
            }
            ParseError::SequenceOutOfRange { name: None } => {
                "A sequence value not bound to option name is defined with fewer or more items than required."
                    .to_string()
            }
            ParseError::BadVerb { token } => format!("Verb '{token}' is not recognized."),
            ParseError::NoVerbSelected => "No verb selected.".to_string(),
            ParseError::RepeatedOption { name } => {
                format!("Option '{name}' is defined multiple times.")
            }
            ParseError::SetViolation { name, set } => {
                format!("Option '{name}' is not compatible with options outside set '{set}'.")
            }
            ParseError::SetValue { name, message } => {
                format!("Error setting value to option '{name}': {message}")
            }
            ParseError::MissingGroup { group, candidates } => {
                format!(
                    "At least one option from group '{group}' ({}) is required.",
                    candidates.join(", ")
                )
            }
            ParseError::GroupAmbiguity { name } => {
                format!("Option '{name}' cannot belong to both an exclusive set and a group.")
            }
            ParseError::MultipleDefaultVerbs => {
                "More than one default verb is not allowed.".to_string()
            }
        }
    }

    /// Renders one synthesized cross-set incompatibility report.
    ///
    /// Plural grammar follows the offending set's member count.
    fn format_set_conflict(&self, conflict: &SetConflict) -> String {
        let plural = conflict.members.len() > 1;
        format!(
            "Option{}: {} {} not compatible with: {}.",
            if plural { "s" } else { "" },
            quote_join(&conflict.members),
            if plural { "are" } else { "is" },
            quote_join(&conflict.incompatible),
        )
    }

    /// Renders one aggregated entry.
    fn render(&self, item: &AggregatedError) -> String {
        match item {
            AggregatedError::Plain(error) => self.format_error(error),
            AggregatedError::SetConflict(conflict) => self.format_set_conflict(conflict),
        }
    }
}

/// The built-in English table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSentenceBuilder;

impl SentenceBuilder for DefaultSentenceBuilder {}

fn quote_join(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
