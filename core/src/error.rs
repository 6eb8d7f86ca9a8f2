//! The closed parse-error taxonomy.
//!
//! Every parse-time fault is one of these variants; none escapes the parser
//! any other way. Rendering happens through the sentence table in
//! `verbline-text`, not through `Display`, so locales can swap the whole
//! message set without touching the binder. Matching on [`ParseError`] is
//! exhaustive: adding a variant is a compile-time-checked, single-point
//! change.

use serde::{Deserialize, Serialize};

/// A single parse-time fault.
///
/// Each variant carries enough context to render a message without
/// re-parsing the argument vector. `name` is an option's long name without
/// dashes; `token` is the raw input token verbatim. A `name` of `None`
/// refers to the verb's positional collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    /// A well-formed option token matched no declared option.
    UnknownOption { token: String },
    /// An option that takes a value was not followed by one.
    MissingValue { name: String },
    /// A token was not recognized as an option or a bindable value.
    BadToken { token: String },
    /// Type coercion failed for a value that was present.
    BadConversion { name: Option<String> },
    /// A required option was never supplied.
    MissingRequired { name: Option<String> },
    /// A sequence collected a value count outside its arity window.
    SequenceOutOfRange { name: Option<String> },
    /// The first token matched no registered verb.
    BadVerb { token: String },
    /// The argument vector was empty.
    NoVerbSelected,
    /// A non-repeatable option appeared more than once.
    RepeatedOption { name: String },
    /// Options from more than one mutually-exclusive set were supplied.
    /// Folded into grouped conflict messages by the aggregator.
    SetViolation { name: String, set: String },
    /// A value check hook rejected a coerced value.
    SetValue { name: String, message: String },
    /// No member of an at-least-one group was supplied.
    MissingGroup {
        group: String,
        candidates: Vec<String>,
    },
    /// An option was declared in both an exclusive set and a group.
    GroupAmbiguity { name: String },
    /// More than one verb in the registry is marked as default.
    MultipleDefaultVerbs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_serialize_with_context() {
        let err = ParseError::MissingGroup {
            group: "format".to_string(),
            candidates: vec!["json".to_string(), "yaml".to_string()],
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("format"));
        assert!(json.contains("yaml"));

        let back: ParseError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn test_token_errors_preserve_input_verbatim() {
        let err = ParseError::UnknownOption {
            token: "--Frobnicate".to_string(),
        };
        match err {
            ParseError::UnknownOption { token } => assert_eq!(token, "--Frobnicate"),
            _ => unreachable!(),
        }
    }
}
