//! Tokenizer and binder.
//!
//! [`Parser`] walks a raw argument vector against a [`SchemaRegistry`] and
//! produces a [`ParseOutcome`]. Parsing a fixed argument vector is a pure,
//! terminating computation: every fault becomes a [`ParseError`] in
//! discovery order, and a single misbehaving value never aborts the walk.

use std::collections::BTreeMap;

use tracing::debug;

use verbline_core::{
    BoundArgs, OptionSpec, ParseError, ParseOutcome, SchemaRegistry, Value, ValueKind, VerbSpec,
};

use crate::token::{RawToken, classify, is_option_marker};

/// Binder behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct ParserSettings {
    /// Match option names case-sensitively. Verb tokens are always
    /// case-insensitive.
    pub case_sensitive_options: bool,
    /// Recognize `--help` / `-h` anywhere and short-circuit to
    /// [`ParseOutcome::HelpRequested`].
    pub auto_help: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            case_sensitive_options: false,
            auto_help: true,
        }
    }
}

/// Binds argument vectors against a read-only registry.
///
/// # Examples
///
/// ```
/// use verbline_core::{OptionSpec, ParseOutcome, SchemaRegistry, ValueKind, VerbSpec};
/// use verbline_parse::Parser;
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     VerbSpec::new("add")
///         .with_option(OptionSpec::valued(Some('f'), "file", ValueKind::Str).required())
///         .with_option(OptionSpec::flag(Some('v'), "verbose")),
/// )?;
///
/// let outcome = Parser::new(&registry).parse(["add", "-f", "a.txt", "-v"]);
/// match outcome {
///     ParseOutcome::Bound(bound) => {
///         assert_eq!(bound.verb, "add");
///         assert!(bound.flag("verbose"));
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// # Ok::<(), verbline_core::RegistryError>(())
/// ```
pub struct Parser<'r> {
    registry: &'r SchemaRegistry,
    settings: ParserSettings,
}

struct BindState<'v> {
    verb: &'v VerbSpec,
    errors: Vec<ParseError>,
    values: BTreeMap<String, Value>,
    bound_order: Vec<String>,
}

impl<'r> Parser<'r> {
    /// Creates a parser with default settings.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self::with_settings(registry, ParserSettings::default())
    }

    /// Creates a parser with explicit settings.
    pub fn with_settings(registry: &'r SchemaRegistry, settings: ParserSettings) -> Self {
        Self { registry, settings }
    }

    /// Parses one argument vector (the process arguments minus the program
    /// name).
    pub fn parse<I, S>(&self, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        // Configuration fault, surfaced on the first parse regardless of
        // input.
        if self.registry.default_verbs().nth(1).is_some() {
            return ParseOutcome::Failed(vec![ParseError::MultipleDefaultVerbs]);
        }

        let Some(first) = tokens.first() else {
            return ParseOutcome::NoVerb;
        };
        if self.is_help_token(first) {
            return ParseOutcome::HelpRequested(None);
        }

        let (verb, rest) = match self.registry.find(first) {
            Some(verb) => (verb, &tokens[1..]),
            None => match self.registry.default_verbs().next() {
                Some(verb) => {
                    debug!(token = %first, verb = %verb.token, "falling back to default verb");
                    (verb, &tokens[..])
                }
                None => {
                    return ParseOutcome::Failed(vec![ParseError::BadVerb {
                        token: first.clone(),
                    }]);
                }
            },
        };
        debug!(verb = %verb.token, tokens = rest.len(), "binding verb arguments");

        self.bind(verb, rest)
    }

    fn bind(&self, verb: &VerbSpec, rest: &[String]) -> ParseOutcome {
        let mut state = BindState {
            verb,
            errors: Vec::new(),
            values: BTreeMap::new(),
            bound_order: Vec::new(),
        };
        let case_sensitive = self.settings.case_sensitive_options;

        let mut i = 0usize;
        while i < rest.len() {
            let token = &rest[i];
            if self.is_help_token(token) {
                return ParseOutcome::HelpRequested(Some(verb.token.clone()));
            }
            match classify(token) {
                RawToken::Long(name) => match verb.find_long(name, case_sensitive) {
                    Some(spec) => i = self.bind_option(&mut state, spec, rest, i),
                    None => {
                        debug!(token = %token, "unknown option");
                        state.errors.push(ParseError::UnknownOption {
                            token: token.clone(),
                        });
                        i += 1;
                    }
                },
                RawToken::Short(c) => match verb.find_short(c, case_sensitive) {
                    Some(spec) => i = self.bind_option(&mut state, spec, rest, i),
                    None => {
                        debug!(token = %token, "unknown option");
                        state.errors.push(ParseError::UnknownOption {
                            token: token.clone(),
                        });
                        i += 1;
                    }
                },
                RawToken::Malformed => {
                    state.errors.push(ParseError::BadToken {
                        token: token.clone(),
                    });
                    i += 1;
                }
                RawToken::Value => match verb.default_option() {
                    Some(spec) => i = self.bind_positional(&mut state, spec, rest, i),
                    None => {
                        state.errors.push(ParseError::BadToken {
                            token: token.clone(),
                        });
                        i += 1;
                    }
                },
            }
        }

        self.check_sets(&mut state);
        self.check_group_ambiguity(&mut state);
        self.check_missing_groups(&mut state);
        self.check_missing_required(&mut state);

        if state.errors.is_empty() {
            ParseOutcome::Bound(BoundArgs {
                verb: verb.token.clone(),
                values: state.values,
            })
        } else {
            debug!(verb = %verb.token, errors = state.errors.len(), "parse failed");
            ParseOutcome::Failed(state.errors)
        }
    }

    /// Binds one named option occurrence; returns the next walk index.
    fn bind_option(
        &self,
        state: &mut BindState<'_>,
        spec: &OptionSpec,
        rest: &[String],
        i: usize,
    ) -> usize {
        match &spec.kind {
            ValueKind::Bool => {
                let (value, next) = match rest.get(i + 1) {
                    Some(tok) if is_bool_literal(tok) => (tok.eq_ignore_ascii_case("true"), i + 2),
                    _ => (true, i + 1),
                };
                let raw = if value { "true" } else { "false" };
                if self.run_check(state, spec, raw) {
                    record_scalar(state, spec, Value::Bool(value));
                }
                next
            }
            ValueKind::Sequence { min, max } => {
                let mut j = i + 1;
                let mut items: Vec<String> = Vec::new();
                while let Some(tok) = rest.get(j) {
                    if is_option_marker(tok) {
                        break;
                    }
                    items.push(tok.clone());
                    j += 1;
                }
                self.bind_sequence(state, spec, items, *min, *max, Some(spec.long.clone()));
                j
            }
            _ => match rest.get(i + 1).filter(|tok| !is_option_marker(tok.as_str())) {
                None => {
                    state.errors.push(ParseError::MissingValue {
                        name: spec.long.clone(),
                    });
                    i + 1
                }
                Some(raw) => {
                    match coerce_scalar(&spec.kind, raw) {
                        Some(value) => {
                            if self.run_check(state, spec, raw) {
                                record_scalar(state, spec, value);
                            }
                        }
                        None => state.errors.push(ParseError::BadConversion {
                            name: Some(spec.long.clone()),
                        }),
                    }
                    i + 2
                }
            },
        }
    }

    /// Binds a run of unbound tokens to the verb's positional collector.
    fn bind_positional(
        &self,
        state: &mut BindState<'_>,
        spec: &OptionSpec,
        rest: &[String],
        i: usize,
    ) -> usize {
        match &spec.kind {
            ValueKind::Sequence { min, max } => {
                let mut j = i;
                let mut items: Vec<String> = Vec::new();
                while let Some(tok) = rest.get(j) {
                    if is_option_marker(tok) {
                        break;
                    }
                    items.push(tok.clone());
                    j += 1;
                }
                self.bind_sequence(state, spec, items, *min, *max, None);
                j
            }
            _ => {
                let raw = &rest[i];
                match coerce_scalar(&spec.kind, raw) {
                    Some(value) => {
                        if self.run_check(state, spec, raw) {
                            record_scalar(state, spec, value);
                        }
                    }
                    None => state
                        .errors
                        .push(ParseError::BadConversion { name: None }),
                }
                i + 1
            }
        }
    }

    fn bind_sequence(
        &self,
        state: &mut BindState<'_>,
        spec: &OptionSpec,
        items: Vec<String>,
        min: usize,
        max: usize,
        err_name: Option<String>,
    ) {
        if items.len() < min || items.len() > max {
            state
                .errors
                .push(ParseError::SequenceOutOfRange { name: err_name });
            return;
        }
        if let Some(check) = spec.check {
            for item in &items {
                if let Err(message) = check(item) {
                    state.errors.push(ParseError::SetValue {
                        name: spec.long.clone(),
                        message,
                    });
                    return;
                }
            }
        }

        let name = spec.long.clone();
        match state.values.get_mut(&name) {
            Some(Value::Seq(existing)) if spec.repeatable => existing.extend(items),
            Some(_) => state.errors.push(ParseError::RepeatedOption { name }),
            None => {
                state.values.insert(name.clone(), Value::Seq(items));
                state.bound_order.push(name);
            }
        }
    }

    /// Runs the option's value check hook; a failure is rewrapped as a
    /// `SetValue` error instead of propagating.
    fn run_check(&self, state: &mut BindState<'_>, spec: &OptionSpec, raw: &str) -> bool {
        match spec.check {
            Some(check) => match check(raw) {
                Ok(()) => true,
                Err(message) => {
                    state.errors.push(ParseError::SetValue {
                        name: spec.long.clone(),
                        message,
                    });
                    false
                }
            },
            None => true,
        }
    }

    /// Emits a `SetViolation` per bound set member when members of more
    /// than one exclusive set were supplied.
    fn check_sets(&self, state: &mut BindState<'_>) {
        let verb = state.verb;
        let bound: Vec<(String, String)> = state
            .bound_order
            .iter()
            .filter_map(|name| {
                verb.options
                    .iter()
                    .find(|o| &o.long == name)
                    .and_then(|o| o.set.clone().map(|set| (name.clone(), set)))
            })
            .collect();

        let mut sets: Vec<&str> = Vec::new();
        for (_, set) in &bound {
            if !sets.contains(&set.as_str()) {
                sets.push(set);
            }
        }
        if sets.len() < 2 {
            return;
        }
        for (name, set) in bound {
            state.errors.push(ParseError::SetViolation { name, set });
        }
    }

    fn check_group_ambiguity(&self, state: &mut BindState<'_>) {
        let verb = state.verb;
        for option in &verb.options {
            if option.set.is_some() && option.group.is_some() {
                state.errors.push(ParseError::GroupAmbiguity {
                    name: option.long.clone(),
                });
            }
        }
    }

    fn check_missing_groups(&self, state: &mut BindState<'_>) {
        let verb = state.verb;
        for group in verb.groups() {
            let candidates = verb.group_members(group);
            if candidates.iter().any(|c| state.values.contains_key(c)) {
                continue;
            }
            state.errors.push(ParseError::MissingGroup {
                group: group.to_string(),
                candidates,
            });
        }
    }

    fn check_missing_required(&self, state: &mut BindState<'_>) {
        let verb = state.verb;
        let chosen_sets: Vec<&str> = verb
            .options
            .iter()
            .filter(|o| state.values.contains_key(&o.long))
            .filter_map(|o| o.set.as_deref())
            .collect();

        for option in &verb.options {
            if !option.required || state.values.contains_key(&option.long) {
                continue;
            }
            // grouped options are required as a group, never individually
            if option.group.is_some() {
                continue;
            }
            // a required set member is waived when a different set was chosen
            if let Some(set) = option.set.as_deref() {
                if chosen_sets.iter().any(|chosen| *chosen != set) {
                    continue;
                }
            }
            let name = if option.default_positional {
                None
            } else {
                Some(option.long.clone())
            };
            state.errors.push(ParseError::MissingRequired { name });
        }
    }

    fn is_help_token(&self, token: &str) -> bool {
        self.settings.auto_help && (token == "--help" || token == "-h")
    }
}

/// Records one scalar binding, enforcing the repeat rule: a repeatable
/// option rebinds to the latest value, anything else errors on a second
/// occurrence.
fn record_scalar(state: &mut BindState<'_>, spec: &OptionSpec, value: Value) {
    let name = spec.long.clone();
    match state.values.get_mut(&name) {
        Some(existing) if spec.repeatable => *existing = value,
        Some(_) => state.errors.push(ParseError::RepeatedOption { name }),
        None => {
            state.values.insert(name.clone(), value);
            state.bound_order.push(name);
        }
    }
}

fn is_bool_literal(token: &str) -> bool {
    token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false")
}

/// Coerces a single raw token. Sequences never reach this path.
fn coerce_scalar(kind: &ValueKind, raw: &str) -> Option<Value> {
    match kind {
        ValueKind::Bool => {
            is_bool_literal(raw).then(|| Value::Bool(raw.eq_ignore_ascii_case("true")))
        }
        ValueKind::Str => Some(Value::Str(raw.to_string())),
        ValueKind::Int => raw.parse::<i64>().ok().map(Value::Int),
        ValueKind::Choice(choices) => choices
            .iter()
            .find(|c| c.eq_ignore_ascii_case(raw))
            .map(|c| Value::Str(c.clone())),
        ValueKind::Sequence { .. } => None,
    }
}
