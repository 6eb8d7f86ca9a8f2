//! Usage and help document assembly.
//!
//! [`HelpAssembler`] combines a registry with optional errors into the
//! final text a user sees: a verb index when no verb is known, or a usage
//! line plus aligned option table for a specific verb, with an errors
//! section rendered through the aggregator and the sentence table.

use verbline_core::{OptionSpec, ParseError, ParseOutcome, SchemaRegistry, ValueKind, VerbSpec};
use verbline_parse::aggregate;

use crate::sentence::{DefaultSentenceBuilder, SentenceBuilder};

/// Builds usage/help text from a registry and (optionally) parse errors.
///
/// # Examples
///
/// ```
/// use verbline_core::{OptionSpec, SchemaRegistry, ValueKind, VerbSpec};
/// use verbline_text::HelpAssembler;
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     VerbSpec::new("add")
///         .with_help("Add file contents to the index.")
///         .with_option(
///             OptionSpec::valued(Some('f'), "file", ValueKind::Str)
///                 .required()
///                 .with_help("Set file."),
///         ),
/// )?;
///
/// let help = HelpAssembler::new()
///     .with_heading("Myapp 2.0.0-beta")
///     .build_help(&registry, Some("add"), &[]);
/// assert!(help.contains("USAGE:"));
/// assert!(help.contains("-f, --file"));
/// # Ok::<(), verbline_core::RegistryError>(())
/// ```
pub struct HelpAssembler {
    heading: String,
    copyright: String,
    auto_help: bool,
    auto_version: bool,
    newline_after_option: bool,
    sentences: Box<dyn SentenceBuilder>,
}

impl Default for HelpAssembler {
    fn default() -> Self {
        Self {
            heading: String::new(),
            copyright: String::new(),
            auto_help: true,
            auto_version: true,
            newline_after_option: false,
            sentences: Box::new(DefaultSentenceBuilder),
        }
    }
}

impl HelpAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading line (program name and version).
    pub fn with_heading(mut self, heading: &str) -> Self {
        self.heading = heading.to_string();
        self
    }

    /// Sets the copyright line.
    pub fn with_copyright(mut self, copyright: &str) -> Self {
        self.copyright = copyright.to_string();
        self
    }

    /// Toggles the synthetic `help` / `--help` entries.
    pub fn auto_help(mut self, on: bool) -> Self {
        self.auto_help = on;
        self
    }

    /// Toggles the synthetic `version` / `--version` entries.
    pub fn auto_version(mut self, on: bool) -> Self {
        self.auto_version = on;
        self
    }

    /// Adds a blank line between option rows.
    pub fn newline_after_option(mut self, on: bool) -> Self {
        self.newline_after_option = on;
        self
    }

    /// Swaps the sentence table (e.g. for another locale).
    pub fn with_sentences(mut self, sentences: Box<dyn SentenceBuilder>) -> Self {
        self.sentences = sentences;
        self
    }

    /// Assembles the help document.
    ///
    /// With no verb, emits the verb index; with a verb, its usage line and
    /// option table. A non-empty error list adds an errors section first,
    /// rendered in aggregator-post-processed order.
    pub fn build_help(
        &self,
        registry: &SchemaRegistry,
        verb: Option<&str>,
        errors: &[ParseError],
    ) -> String {
        let mut out = String::new();

        if !self.heading.is_empty() {
            out.push_str(&self.heading);
            out.push('\n');
        }
        if !self.copyright.is_empty() {
            out.push_str(&self.copyright);
            out.push('\n');
        }
        if !out.is_empty() {
            out.push('\n');
        }

        if !errors.is_empty() {
            out.push_str(&self.sentences.errors_heading());
            out.push('\n');
            for item in aggregate(errors) {
                out.push_str("  ");
                out.push_str(&self.sentences.render(&item));
                out.push('\n');
            }
            out.push('\n');
        }

        match verb.and_then(|token| registry.find(token)) {
            Some(verb) => out.push_str(&self.verb_section(verb)),
            None => out.push_str(&self.verb_index(registry)),
        }

        out
    }

    /// Renders the text for a non-`Bound` outcome; `None` means nothing to
    /// print.
    pub fn render_outcome(
        &self,
        registry: &SchemaRegistry,
        outcome: &ParseOutcome,
    ) -> Option<String> {
        match outcome {
            ParseOutcome::Bound(_) => None,
            ParseOutcome::Failed(errors) => Some(self.build_help(registry, None, errors)),
            ParseOutcome::NoVerb => {
                Some(self.build_help(registry, None, &[ParseError::NoVerbSelected]))
            }
            ParseOutcome::HelpRequested(verb) => {
                Some(self.build_help(registry, verb.as_deref(), &[]))
            }
        }
    }

    fn verb_index(&self, registry: &SchemaRegistry) -> String {
        let mut rows: Vec<(String, String)> = registry
            .verbs()
            .iter()
            .map(|v| (v.token.clone(), v.help.clone()))
            .collect();
        if self.auto_help {
            rows.push(("help".to_string(), self.sentences.help_command_text(false)));
        }
        if self.auto_version {
            rows.push((
                "version".to_string(),
                self.sentences.version_command_text(false),
            ));
        }

        render_rows(&rows, false)
    }

    fn verb_section(&self, verb: &VerbSpec) -> String {
        let mut out = String::new();
        out.push_str(&self.sentences.usage_heading());
        out.push('\n');
        out.push_str(&format!("  {}\n\n", usage_line(verb)));

        let mut rows: Vec<(String, String)> = verb
            .options
            .iter()
            .map(|o| (option_names(o), self.option_description(o)))
            .collect();
        if self.auto_help {
            rows.push(("--help".to_string(), self.sentences.help_command_text(true)));
        }
        if self.auto_version {
            rows.push((
                "--version".to_string(),
                self.sentences.version_command_text(true),
            ));
        }

        out.push_str(&render_rows(&rows, self.newline_after_option));
        out
    }

    fn option_description(&self, option: &OptionSpec) -> String {
        let mut parts: Vec<String> = Vec::new();
        if option.required && option.group.is_none() {
            parts.push(self.sentences.required_word());
        }
        if let Some(group) = &option.group {
            parts.push(format!("({}: {group})", self.sentences.option_group_word()));
        }
        if !option.help.is_empty() {
            parts.push(option.help.clone());
        }
        parts.join(" ")
    }
}

fn render_rows(rows: &[(String, String)], spaced: bool) -> String {
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, description) in rows {
        out.push_str(&format!("  {name:<width$}  {description}\n"));
        if spaced {
            out.push('\n');
        }
    }
    out
}

fn option_names(option: &OptionSpec) -> String {
    match option.short {
        Some(short) => format!("-{short}, --{}", option.long),
        None => format!("--{}", option.long),
    }
}

fn usage_line(verb: &VerbSpec) -> String {
    let mut parts = vec![verb.token.clone()];
    let mut has_optional = false;

    for option in &verb.options {
        if option.default_positional {
            continue;
        }
        if option.required && option.set.is_none() && option.group.is_none() {
            parts.push(match &option.kind {
                ValueKind::Bool => format!("--{}", option.long),
                ValueKind::Sequence { .. } => format!("--{} <value>...", option.long),
                _ => format!("--{} <value>", option.long),
            });
        } else {
            has_optional = true;
        }
    }
    if has_optional {
        parts.push("[options]".to_string());
    }
    if let Some(collector) = verb.default_option() {
        parts.push(match &collector.kind {
            ValueKind::Sequence { .. } => format!("<{}>...", collector.long),
            _ => format!("<{}>", collector.long),
        });
    }

    parts.join(" ")
}
