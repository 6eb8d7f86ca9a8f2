//! Demo front end: a small git-like command line built on the verbline
//! crates.
//!
//! Registers three verbs (`add`, `commit`, `clone`), parses the process
//! arguments, and either prints the bound values as JSON or renders help
//! and error text. Exit codes follow the parser's convention: 0 for a
//! successful bind or a help request, 2 for a failed parse.

use verbline_core::{OptionSpec, RegistryError, SchemaRegistry, ValueKind, VerbSpec};
use verbline_parse::parse;
use verbline_text::HelpAssembler;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn build_registry() -> Result<SchemaRegistry, RegistryError> {
    let mut registry = SchemaRegistry::new();

    registry.register(
        VerbSpec::new("add")
            .with_help("Add file contents to the index.")
            .with_option(
                OptionSpec::valued(Some('f'), "file", ValueKind::Str)
                    .required()
                    .with_help("Set file."),
            )
            .with_option(
                OptionSpec::flag(Some('v'), "verbose")
                    .with_help("Set output to verbose messages."),
            ),
    )?;

    registry.register(
        VerbSpec::new("commit")
            .with_help("Record changes to the repository.")
            .with_option(
                OptionSpec::valued(Some('m'), "message", ValueKind::Str)
                    .with_help("Use the given message as the commit message."),
            )
            .with_option(
                OptionSpec::flag(None, "amend").with_help("Amend the previous commit."),
            )
            .with_option(
                OptionSpec::flag(Some('v'), "verbose")
                    .with_help("Set output to verbose messages."),
            ),
    )?;

    registry.register(
        VerbSpec::new("clone")
            .with_help("Clone a repository into a new directory.")
            .with_option(OptionSpec::flag(Some('q'), "quiet").with_help("Suppress summary message."))
            .with_option(
                OptionSpec::sequence(None, "urls", 1, usize::MAX)
                    .positional()
                    .with_help("Repository urls to clone."),
            ),
    )?;

    Ok(registry)
}

fn main() {
    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();

    let assembler = HelpAssembler::new()
        .with_heading(&format!("verbline {PACKAGE_VERSION}"))
        .with_copyright("Copyright (c) 2026 verbline contributors");

    // The synthetic `help` and `version` verbs advertised in the index are
    // resolved here, before the registry sees the arguments.
    match args.first().map(String::as_str) {
        Some("help") => {
            print!("{}", assembler.build_help(&registry, args.get(1).map(String::as_str), &[]));
            return;
        }
        Some("version") | Some("--version") => {
            println!("verbline {PACKAGE_VERSION}");
            return;
        }
        _ => {}
    }

    let outcome = parse(&args, &registry);

    match &outcome {
        verbline_core::ParseOutcome::Bound(bound) => match serde_json::to_string_pretty(bound) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        verbline_core::ParseOutcome::HelpRequested(verb) => {
            print!("{}", assembler.build_help(&registry, verb.as_deref(), &[]));
        }
        failed => {
            // The verb section gives better context than the index when the
            // first token named a known verb.
            let verb = args.first().map(String::as_str).filter(|t| registry.find(t).is_some());
            let errors = failed.failure_errors().unwrap_or_default();
            eprint!("{}", assembler.build_help(&registry, verb, &errors));
        }
    }

    std::process::exit(outcome.exit_code());
}
