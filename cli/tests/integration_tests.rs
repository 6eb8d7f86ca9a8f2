use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_verbline"))
        .args(args)
        .output()
        .expect("failed to run verbline")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn successful_bind_prints_json_and_exits_zero() {
    let output = run(&["add", "-f", "a.txt", "-v"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("stdout is JSON");
    assert_eq!(json["verb"], "add");
    assert_eq!(json["values"]["file"], "a.txt");
    assert_eq!(json["values"]["verbose"], true);
    assert!(stderr(&output).is_empty());
}

#[test]
fn missing_required_option_renders_errors_and_usage_on_stderr() {
    let output = run(&["add"]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("ERROR(S):"));
    assert!(err.contains("Required option 'file' is missing."));
    assert!(err.contains("USAGE:"));
    assert!(err.contains("-f, --file"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_verb_renders_verb_index() {
    let output = run(&["push"]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Verb 'push' is not recognized."));
    assert!(err.contains("commit"));
    assert!(err.contains("clone"));
}

#[test]
fn empty_invocation_reports_no_verb_selected() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No verb selected."));
}

#[test]
fn help_verb_prints_index_and_exits_zero() {
    let output = run(&["help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("add"));
    assert!(out.contains("Record changes to the repository."));
    assert!(stderr(&output).is_empty());
}

#[test]
fn help_verb_with_argument_prints_that_verb_section() {
    let output = run(&["help", "commit"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("USAGE:"));
    assert!(out.contains("-m, --message"));
    assert!(out.contains("--amend"));
}

#[test]
fn version_verb_prints_version_and_exits_zero() {
    let output = run(&["version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("verbline "));
}

#[test]
fn verb_help_flag_prints_option_table() {
    let output = run(&["add", "--help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("USAGE:"));
    assert!(out.contains("add --file <value> [options]"));
    assert!(out.contains("Required. Set file."));
}

#[test]
fn clone_collects_positional_urls() {
    let output = run(&["clone", "http://a.example", "http://b.example", "-q"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("stdout is JSON");
    assert_eq!(json["verb"], "clone");
    assert_eq!(json["values"]["quiet"], true);
    assert_eq!(
        json["values"]["urls"],
        serde_json::json!(["http://a.example", "http://b.example"])
    );
}
