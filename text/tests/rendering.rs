//! Full pipeline: parse failure to rendered help text.

use verbline_core::{OptionSpec, ParseError, SchemaRegistry, ValueKind, VerbSpec};
use verbline_parse::parse;
use verbline_text::{HelpAssembler, SentenceBuilder};

fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            VerbSpec::new("fetch")
                .with_help("Fetch content from a source.")
                .with_option(
                    OptionSpec::valued(None, "url", ValueKind::Str)
                        .in_set("web")
                        .with_help("Fetch over HTTP."),
                )
                .with_option(
                    OptionSpec::valued(None, "proxy", ValueKind::Str)
                        .in_set("web")
                        .with_help("Proxy to use."),
                )
                .with_option(
                    OptionSpec::valued(None, "path", ValueKind::Str)
                        .in_set("local")
                        .with_help("Read from disk."),
                ),
        )
        .unwrap();
    registry
}

#[test]
fn conflicting_sets_render_one_grouped_message_per_set() {
    let registry = registry();
    let outcome = parse(
        ["fetch", "--url", "http://x", "--proxy", "p", "--path", "/tmp/x"],
        &registry,
    );
    let errors = outcome.failure_errors().expect("parse must fail");
    let text = HelpAssembler::new().build_help(&registry, Some("fetch"), &errors);

    // both option names appear, plural grammar only for the two-member set
    assert!(text.contains("Options: 'url', 'proxy' are not compatible with: 'path'."));
    assert!(text.contains("Option: 'path' is not compatible with: 'url', 'proxy'."));
}

#[test]
fn failed_parse_always_yields_errors_and_help() {
    let registry = registry();
    let outcome = parse(["fetch", "--bogus"], &registry);
    let errors = outcome.failure_errors().expect("parse must fail");
    assert!(!errors.is_empty());

    let text = HelpAssembler::new()
        .with_heading("Myapp 2.0.0-beta")
        .with_copyright("Copyright (c) 2019 Global.com")
        .build_help(&registry, Some("fetch"), &errors);

    assert!(text.contains("ERROR(S):"));
    assert!(text.contains("Option '--bogus' is unknown."));
    assert!(text.contains("USAGE:"));
    assert!(text.contains("--url"));
}

#[test]
fn swapped_sentence_table_localizes_headings() {
    struct Japanese;

    impl SentenceBuilder for Japanese {
        fn errors_heading(&self) -> String {
            "エラー:".to_string()
        }

        fn usage_heading(&self) -> String {
            "使い方:".to_string()
        }
    }

    let registry = registry();
    let errors = vec![ParseError::NoVerbSelected];
    let text = HelpAssembler::new()
        .with_sentences(Box::new(Japanese))
        .build_help(&registry, Some("fetch"), &errors);

    assert!(text.contains("エラー:"));
    assert!(text.contains("使い方:"));
    assert!(!text.contains("ERROR(S):"));
}
