//! Command dispatch: resolve parsed arguments to handlers

use std::ffi::OsString;
use std::path::Path;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, LangCommands, ToolCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{Console, ExecutionResult, Outcome};
use crate::exitcode;
use crate::tools::lang::TemplateOptions;
use crate::tools::ToolSet;

const BIN_NAME: &str = "wc";

/// Run the CLI against the given arguments (without the program name).
pub fn run<I, S>(argv: I) -> ExecutionResult
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    run_with_tools(argv, &ToolSet::new())
}

/// Run with an explicit tool set so tests can inject doubles.
pub fn run_with_tools<I, S>(argv: I, tools: &ToolSet) -> ExecutionResult
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut console = Console::default();
    match evaluate(argv, tools, &mut console) {
        Ok(outcome) => ExecutionResult::new(outcome, exitcode::OK, console),
        Err(err) => {
            let outcome = match &err {
                CliError::Usage(rendered) => {
                    // Clap already renders the error line plus a usage block.
                    console.err_text(rendered);
                    Outcome::UsageError
                }
                CliError::Delegate(source) => {
                    console.err_line(format!("error: {source}"));
                    Outcome::DelegateError
                }
            };
            ExecutionResult::new(outcome, err.exit_code(), console)
        }
    }
}

fn evaluate<I, S>(argv: I, tools: &ToolSet, console: &mut Console) -> CliResult<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut full: Vec<OsString> = vec![OsString::from(BIN_NAME)];
    full.extend(argv.into_iter().map(Into::into));

    let cli = match Cli::try_parse_from(&full) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            console.out_text(&err.to_string());
            return Ok(Outcome::HelpDisplayed);
        }
        Err(err) => return Err(CliError::Usage(err.to_string())),
    };

    crate::logging::init(cli.debug);

    if cli.version {
        console.out_line(env!("CARGO_PKG_VERSION"));
        return Ok(Outcome::HelpDisplayed);
    }

    execute(&cli, tools, console)
}

fn execute(cli: &Cli, tools: &ToolSet, console: &mut Console) -> CliResult<Outcome> {
    match &cli.command {
        None => show_help(&[], console),
        Some(Commands::Model) => show_help(&["model"], console),
        Some(Commands::Tool { command }) => match command {
            None => show_help(&["tool"], console),
            Some(ToolCommands::Kb) => show_help(&["tool", "kb"], console),
            Some(ToolCommands::Sim) => show_help(&["tool", "sim"], console),
            Some(ToolCommands::Lang { command }) => match command {
                None => show_help(&["tool", "lang"], console),
                Some(LangCommands::CreateTemplate {
                    path,
                    ignore_repo_metadata,
                }) => create_template(path, *ignore_repo_metadata, tools, console),
            },
        },
        Some(Commands::Completion { shell }) => generate_completion(*shell, console),
    }
}

#[instrument(skip(tools, console))]
fn create_template(
    path: &Path,
    ignore_repo_metadata: bool,
    tools: &ToolSet,
    console: &mut Console,
) -> CliResult<Outcome> {
    debug!("creating template workbook");
    let options = TemplateOptions {
        ignore_repo_metadata,
    };
    tools.lang().create_template(path, &options)?;
    console.out_line(format!("created template: {}", path.display()));
    Ok(Outcome::Success)
}

/// Render the help screen for a node of the command tree.
///
/// Reparsing with a trailing `--help` keeps usage lines identical to what
/// clap prints for real `--help` invocations at that level.
fn show_help(path: &[&str], console: &mut Console) -> CliResult<Outcome> {
    let mut argv: Vec<OsString> = vec![OsString::from(BIN_NAME)];
    argv.extend(path.iter().copied().map(OsString::from));
    argv.push(OsString::from("--help"));

    match Cli::try_parse_from(&argv) {
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            console.out_text(&err.to_string());
            Ok(Outcome::HelpDisplayed)
        }
        // `--help` always yields DisplayHelp; anything else is a tree bug.
        _ => Err(CliError::Usage(format!(
            "cannot render help for `{}`",
            path.join(" ")
        ))),
    }
}

fn generate_completion(shell: clap_complete::Shell, console: &mut Console) -> CliResult<Outcome> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(shell, &mut command, name, &mut buf);
    console.out_text(&String::from_utf8_lossy(&buf));
    Ok(Outcome::Success)
}
