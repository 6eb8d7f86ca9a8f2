//! Parse results: coerced values, bound arguments, and the outcome sum type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A coerced option value.
///
/// Serializes untagged, so bound values print as plain JSON scalars and
/// arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    Seq(Vec<String>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[String]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }
}

/// A successful parse: the selected verb and its bound values.
///
/// Values are keyed by option long name and contain exactly the options
/// that were supplied (plus nothing else); coercion has already succeeded
/// for every value present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundArgs {
    pub verb: String,
    pub values: BTreeMap<String, Value>,
}

impl BoundArgs {
    /// Looks up a bound value by option long name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a boolean option was bound true.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Re-serializes the binding back into an argument vector.
    ///
    /// Re-parsing the returned vector against the same registry yields an
    /// equivalent binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use verbline_core::{BoundArgs, Value};
    ///
    /// let mut values = BTreeMap::new();
    /// values.insert("file".to_string(), Value::Str("a.txt".to_string()));
    /// values.insert("verbose".to_string(), Value::Bool(true));
    /// let bound = BoundArgs { verb: "add".to_string(), values };
    ///
    /// assert_eq!(bound.to_argv(), vec!["add", "--file", "a.txt", "--verbose"]);
    /// ```
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = vec![self.verb.clone()];
        for (name, value) in &self.values {
            argv.push(format!("--{name}"));
            match value {
                Value::Bool(true) => {}
                Value::Bool(false) => argv.push("false".to_string()),
                Value::Int(i) => argv.push(i.to_string()),
                Value::Str(s) => argv.push(s.clone()),
                Value::Seq(items) => argv.extend(items.iter().cloned()),
            }
        }
        argv
    }
}

/// Result of parsing one argument vector.
///
/// Created fresh per invocation; immutable and freely shareable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParseOutcome {
    /// All tokens bound and all checks passed.
    Bound(BoundArgs),
    /// One or more faults, in discovery order. Never empty.
    Failed(Vec<ParseError>),
    /// The argument vector was empty. Rendering-equivalent to
    /// `Failed([NoVerbSelected])`; see [`failure_errors`].
    ///
    /// [`failure_errors`]: ParseOutcome::failure_errors
    NoVerb,
    /// A help token short-circuited parsing. Carries the verb selected so
    /// far, if any.
    HelpRequested(Option<String>),
}

impl ParseOutcome {
    /// Whether the outcome represents a failed parse.
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseOutcome::Failed(_) | ParseOutcome::NoVerb)
    }

    /// The errors to render for a failed parse.
    ///
    /// `NoVerb` materializes as a single `NoVerbSelected` error so callers
    /// see one uniform failure shape. Returns `None` for `Bound` and
    /// `HelpRequested`.
    pub fn failure_errors(&self) -> Option<Vec<ParseError>> {
        match self {
            ParseOutcome::Failed(errors) => Some(errors.clone()),
            ParseOutcome::NoVerb => Some(vec![ParseError::NoVerbSelected]),
            _ => None,
        }
    }

    /// Recommended process exit code: 0 on success or help, 2 on failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() { 2 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_serialize_untagged() {
        let mut values = BTreeMap::new();
        values.insert("file".to_string(), Value::Str("a.txt".to_string()));
        values.insert("verbose".to_string(), Value::Bool(true));
        values.insert("depth".to_string(), Value::Int(3));
        let bound = BoundArgs {
            verb: "add".to_string(),
            values,
        };

        let json = serde_json::to_string(&bound).unwrap();
        assert!(json.contains("\"file\":\"a.txt\""));
        assert!(json.contains("\"verbose\":true"));
        assert!(json.contains("\"depth\":3"));
    }

    #[test]
    fn test_no_verb_materializes_as_no_verb_selected() {
        let outcome = ParseOutcome::NoVerb;
        assert!(outcome.is_failure());
        assert_eq!(outcome.exit_code(), 2);
        assert_eq!(
            outcome.failure_errors(),
            Some(vec![ParseError::NoVerbSelected])
        );
    }

    #[test]
    fn test_exit_codes_follow_convention() {
        let bound = ParseOutcome::Bound(BoundArgs {
            verb: "add".to_string(),
            values: BTreeMap::new(),
        });
        assert_eq!(bound.exit_code(), 0);
        assert_eq!(ParseOutcome::HelpRequested(None).exit_code(), 0);
        assert_eq!(
            ParseOutcome::Failed(vec![ParseError::NoVerbSelected]).exit_code(),
            2
        );
    }

    #[test]
    fn test_to_argv_emits_sequence_values_inline() {
        let mut values = BTreeMap::new();
        values.insert(
            "tags".to_string(),
            Value::Seq(vec!["a".to_string(), "b".to_string()]),
        );
        let bound = BoundArgs {
            verb: "commit".to_string(),
            values,
        };
        assert_eq!(bound.to_argv(), vec!["commit", "--tags", "a", "b"]);
    }
}
