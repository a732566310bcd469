//! Tests for command tree dispatch: help, version, and usage errors

use regex::Regex;
use rstest::rstest;
use wc_cli::util::testing;
use wc_cli::{exitcode, run, ExecutionResult, Outcome};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Helper to run the CLI against a plain argument list
fn run_wc(args: &[&str]) -> ExecutionResult {
    run(args.iter().copied())
}

// ============================================================
// root help
// ============================================================

#[test]
fn given_no_arguments_when_running_then_usage_goes_to_stdout() {
    // Act
    let result = run_wc(&[]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    let usage = Regex::new(r"usage: wc").unwrap();
    assert!(usage.is_match(&result.stdout));
    assert!(result.stdout.contains("model"));
    assert!(result.stdout.contains("tool"));
    assert_eq!(result.stderr, "");
}

#[rstest]
#[case::short("-h")]
#[case::long("--help")]
fn given_help_flag_when_running_then_help_matches_bare_invocation(#[case] flag: &str) {
    // Arrange
    let bare = run_wc(&[]);

    // Act
    let with_flag = run_wc(&[flag]);

    // Assert
    assert_eq!(with_flag.exit_code, exitcode::OK);
    assert_eq!(with_flag.outcome, Outcome::HelpDisplayed);
    assert_eq!(with_flag.stdout, bare.stdout);
    assert_eq!(with_flag.stderr, "");
}

// ============================================================
// version
// ============================================================

#[rstest]
#[case::short("-v")]
#[case::long("--version")]
fn given_version_flag_when_running_then_exact_version_is_printed(#[case] flag: &str) {
    // Act
    let result = run_wc(&[flag]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    assert_eq!(result.stdout, concat!(env!("CARGO_PKG_VERSION"), "\n"));
    assert_eq!(result.stderr, "");
}

// ============================================================
// group help
// ============================================================

#[test]
fn given_model_group_when_running_then_known_repositories_are_listed() {
    // Act
    let result = run_wc(&["model"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    assert!(result.stdout.contains("usage: wc model"));
    assert!(result.stdout.contains("mycoplasma-pneumoniae"));
    assert_eq!(result.stderr, "");
}

#[test]
fn given_tool_group_when_running_then_subtools_are_listed() {
    // Act
    let result = run_wc(&["tool"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    for name in ["kb", "lang", "sim"] {
        assert!(result.stdout.contains(name), "missing tool: {name}");
    }
    assert_eq!(result.stderr, "");
}

#[test]
fn given_tool_group_when_running_then_output_matches_explicit_help() {
    // Act
    let bare = run_wc(&["tool"]);
    let with_flag = run_wc(&["tool", "--help"]);

    // Assert
    assert_eq!(bare.stdout, with_flag.stdout);
    assert_eq!(bare.exit_code, with_flag.exit_code);
}

#[rstest]
#[case::kb("kb")]
#[case::sim("sim")]
fn given_leaf_tool_group_when_running_then_usage_names_full_path(#[case] tool: &str) {
    // Act
    let result = run_wc(&["tool", tool]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    assert!(result.stdout.contains(&format!("usage: wc tool {tool}")));
    assert_eq!(result.stderr, "");
}

#[test]
fn given_lang_group_when_running_then_create_template_is_listed() {
    // Act
    let result = run_wc(&["tool", "lang"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::HelpDisplayed);
    assert!(result.stdout.contains("usage: wc tool lang"));
    assert!(result.stdout.contains("create-template"));
}

// ============================================================
// usage errors
// ============================================================

#[rstest]
#[case::root(&["frobnicate"][..])]
#[case::tool(&["tool", "quantum"][..])]
#[case::lang(&["tool", "lang", "destroy-template"][..])]
fn given_unknown_command_when_running_then_usage_error(#[case] args: &[&str]) {
    // Act
    let result = run_wc(args);

    // Assert
    assert_eq!(result.exit_code, exitcode::USAGE);
    assert_eq!(result.outcome, Outcome::UsageError);
    assert_eq!(result.stdout, "");
    assert!(result.stderr.contains("unrecognized subcommand"));
}

#[test]
fn given_leftover_tokens_when_running_then_usage_error() {
    // Act
    let result = run_wc(&["model", "extra"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::USAGE);
    assert_eq!(result.outcome, Outcome::UsageError);
    assert_eq!(result.stdout, "");
    assert!(!result.stderr.is_empty());
}

#[test]
fn given_create_template_without_path_when_running_then_usage_error() {
    // Act
    let result = run_wc(&["tool", "lang", "create-template"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::USAGE);
    assert_eq!(result.outcome, Outcome::UsageError);
    assert_eq!(result.stdout, "");
    assert!(result.stderr.contains("required"));
}

#[test]
fn given_unknown_flag_when_running_then_usage_error() {
    // Act
    let result = run_wc(&["--frobnicate"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::USAGE);
    assert_eq!(result.outcome, Outcome::UsageError);
    assert_eq!(result.stdout, "");
    assert!(result.stderr.contains("unexpected argument"));
}

// ============================================================
// shell completions
// ============================================================

#[test]
fn given_completion_command_when_running_then_script_is_emitted() {
    // Act
    let result = run_wc(&["completion", "bash"]);

    // Assert
    assert_eq!(result.exit_code, exitcode::OK);
    assert_eq!(result.outcome, Outcome::Success);
    assert!(result.stdout.contains("wc"));
    assert_eq!(result.stderr, "");
}
