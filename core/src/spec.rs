//! Schema type definitions for verbs and options.
//!
//! This module defines the declarative data model a caller builds before
//! parsing anything: [`VerbSpec`] describes a subcommand, [`OptionSpec`]
//! describes one named input under a verb, and [`ValueKind`] describes the
//! coercion applied to its raw token(s). The types serialize with [`serde`]
//! so schemas can round-trip through JSON declarations.

use serde::{Deserialize, Serialize};

/// Fallible value check invoked after coercion succeeds.
///
/// A failing check surfaces as a `SetValue` parse error carrying the
/// returned message; it never aborts parsing of the remaining arguments.
pub type ValueCheck = fn(&str) -> Result<(), String>;

/// Coercion applied to an option's raw token(s).
///
/// # Examples
///
/// ```
/// use verbline_core::ValueKind;
///
/// let kind = ValueKind::default();
/// assert_eq!(kind, ValueKind::Bool);
///
/// let format = ValueKind::Choice(vec!["json".into(), "yaml".into()]);
/// assert!(matches!(format, ValueKind::Choice(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Boolean flag: bare presence means `true`; a following literal
    /// `true`/`false` (any case) is consumed as the value.
    #[default]
    Bool,
    /// Free-form string value.
    Str,
    /// Signed integer value.
    Int,
    /// One of a fixed set of spellings, matched case-insensitively.
    /// The declared spelling is what gets bound.
    Choice(Vec<String>),
    /// A run of consecutive non-option tokens; the collected count must
    /// fall inside `[min, max]`.
    Sequence { min: usize, max: usize },
}

impl ValueKind {
    /// Whether this kind consumes at least one value token.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbline_core::ValueKind;
    ///
    /// assert!(!ValueKind::Bool.takes_value());
    /// assert!(ValueKind::Str.takes_value());
    /// assert!(ValueKind::Sequence { min: 1, max: 3 }.takes_value());
    /// ```
    pub fn takes_value(&self) -> bool {
        !matches!(self, ValueKind::Bool)
    }
}

/// Schema for one option under a verb.
///
/// An option has an optional short form (e.g. `-f`) and a long name
/// (e.g. `file`, written `--file` on the command line). The long name is
/// the option's identity: it keys bound values and appears in error
/// messages.
///
/// Use the constructors [`flag`](OptionSpec::flag),
/// [`valued`](OptionSpec::valued), and [`sequence`](OptionSpec::sequence),
/// then chain modifiers:
///
/// ```
/// use verbline_core::{OptionSpec, ValueKind};
///
/// let file = OptionSpec::valued(Some('f'), "file", ValueKind::Str)
///     .required()
///     .with_help("Set file.");
/// assert!(file.required);
/// assert_eq!(file.long, "file");
///
/// let verbose = OptionSpec::flag(Some('v'), "verbose");
/// assert!(!verbose.kind.takes_value());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short form, without the dash (e.g. `'f'` for `-f`).
    pub short: Option<char>,
    /// Long name, without dashes (e.g. `"file"` for `--file`).
    pub long: String,
    /// Whether the option must be supplied.
    pub required: bool,
    /// Value coercion.
    pub kind: ValueKind,
    /// One-line help text.
    pub help: String,
    /// Mutually-exclusive set name. Options from different sets may not
    /// be supplied together.
    pub set: Option<String>,
    /// Group name. At least one option of a group must be supplied;
    /// grouped options are never individually required.
    pub group: Option<String>,
    /// Collects unbound positional tokens. At most one per verb.
    pub default_positional: bool,
    /// Whether the option may appear more than once.
    pub repeatable: bool,
    /// Optional per-value check hook.
    #[serde(skip)]
    pub check: Option<ValueCheck>,
}

impl OptionSpec {
    /// Creates a boolean flag.
    pub fn flag(short: Option<char>, long: &str) -> Self {
        Self::valued(short, long, ValueKind::Bool)
    }

    /// Creates an option with the given value kind.
    pub fn valued(short: Option<char>, long: &str, kind: ValueKind) -> Self {
        Self {
            short,
            long: long.to_string(),
            required: false,
            kind,
            help: String::new(),
            set: None,
            group: None,
            default_positional: false,
            repeatable: false,
            check: None,
        }
    }

    /// Creates a sequence option with the given arity window.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbline_core::{OptionSpec, ValueKind};
    ///
    /// let tags = OptionSpec::sequence(Some('t'), "tags", 1, 3);
    /// assert_eq!(tags.kind, ValueKind::Sequence { min: 1, max: 3 });
    /// ```
    pub fn sequence(short: Option<char>, long: &str, min: usize, max: usize) -> Self {
        Self::valued(short, long, ValueKind::Sequence { min, max })
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Places the option in a mutually-exclusive set.
    pub fn in_set(mut self, set: &str) -> Self {
        self.set = Some(set.to_string());
        self
    }

    /// Places the option in an at-least-one group.
    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    /// Marks the option as the verb's positional-value collector.
    pub fn positional(mut self) -> Self {
        self.default_positional = true;
        self
    }

    /// Allows the option to appear multiple times.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Attaches a value check hook.
    pub fn with_check(mut self, check: ValueCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Checks the long name against a candidate.
    pub fn matches_long(&self, name: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.long == name
        } else {
            self.long.eq_ignore_ascii_case(name)
        }
    }

    /// Checks the short form against a candidate.
    pub fn matches_short(&self, c: char, case_sensitive: bool) -> bool {
        match self.short {
            Some(s) if case_sensitive => s == c,
            Some(s) => s.eq_ignore_ascii_case(&c),
            None => false,
        }
    }
}

/// Schema for one verb (subcommand).
///
/// # Examples
///
/// ```
/// use verbline_core::{OptionSpec, ValueKind, VerbSpec};
///
/// let add = VerbSpec::new("add")
///     .with_help("Add file contents to the index.")
///     .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str).required())
///     .with_option(OptionSpec::flag(Some('v'), "verbose"));
///
/// assert_eq!(add.token, "add");
/// assert!(add.find_long("FILE", false).is_some());
/// assert!(add.find_short('v', false).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerbSpec {
    /// Verb token, compared case-insensitively across the registry.
    pub token: String,
    /// One-line help text shown in the verb index.
    pub help: String,
    /// Options in declaration order.
    pub options: Vec<OptionSpec>,
    /// Whether unmatched leading tokens fall back to this verb.
    pub is_default: bool,
}

impl VerbSpec {
    /// Creates a new verb schema with the given token.
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            ..Default::default()
        }
    }

    /// Adds help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Marks this verb as the default verb.
    pub fn default_verb(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Finds an option by long name.
    pub fn find_long(&self, name: &str, case_sensitive: bool) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|o| o.matches_long(name, case_sensitive))
    }

    /// Finds an option by short form.
    pub fn find_short(&self, c: char, case_sensitive: bool) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|o| o.matches_short(c, case_sensitive))
    }

    /// The positional-value collector, if one is declared.
    pub fn default_option(&self) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.default_positional)
    }

    /// Group names in declaration order, deduplicated.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for option in &self.options {
            if let Some(group) = option.group.as_deref() {
                if !groups.contains(&group) {
                    groups.push(group);
                }
            }
        }
        groups
    }

    /// Long names of the members of a group, in declaration order.
    pub fn group_members(&self, group: &str) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.group.as_deref() == Some(group))
            .map(|o| o.long.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_spec_builders() {
        let file = OptionSpec::valued(Some('f'), "file", ValueKind::Str)
            .required()
            .with_help("Set file.");

        assert_eq!(file.short, Some('f'));
        assert_eq!(file.long, "file");
        assert!(file.required);
        assert_eq!(file.help, "Set file.");
    }

    #[test]
    fn test_option_matching_is_case_insensitive_by_default() {
        let opt = OptionSpec::flag(Some('V'), "Verbose");

        assert!(opt.matches_long("verbose", false));
        assert!(!opt.matches_long("verbose", true));
        assert!(opt.matches_short('v', false));
        assert!(!opt.matches_short('v', true));
    }

    #[test]
    fn test_verb_spec_lookup() {
        let verb = VerbSpec::new("add")
            .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str))
            .with_option(OptionSpec::flag(Some('v'), "verbose"));

        assert!(verb.find_long("file", false).is_some());
        assert!(verb.find_short('v', false).is_some());
        assert!(verb.find_long("missing", false).is_none());
    }

    #[test]
    fn test_verb_groups_preserve_declaration_order() {
        let verb = VerbSpec::new("export")
            .with_option(OptionSpec::flag(None, "json").in_group("format"))
            .with_option(OptionSpec::flag(None, "quiet"))
            .with_option(OptionSpec::flag(None, "yaml").in_group("format"))
            .with_option(OptionSpec::flag(None, "stdout").in_group("target"));

        assert_eq!(verb.groups(), vec!["format", "target"]);
        assert_eq!(verb.group_members("format"), vec!["json", "yaml"]);
    }

    #[test]
    fn test_value_check_hook_is_invocable() {
        fn no_spaces(value: &str) -> Result<(), String> {
            if value.contains(' ') {
                Err("value may not contain spaces".to_string())
            } else {
                Ok(())
            }
        }

        let opt = OptionSpec::valued(None, "name", ValueKind::Str).with_check(no_spaces);
        let check = opt.check.expect("check must be set");
        assert!(check("ok").is_ok());
        assert!(check("not ok").is_err());
    }
}
