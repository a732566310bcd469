//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Help layout shared by every command level (lowercase usage heading).
const HELP_TEMPLATE: &str = "\
{before-help}{about-with-newline}
usage: {usage}

{all-args}{after-help}";

/// Command line programs for whole-cell modeling
#[derive(Parser, Debug)]
#[command(name = "wc")]
#[command(about, long_about = None)]
#[command(help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Print the version and exit
    #[arg(short, long)]
    pub version: bool,

    /// Increase diagnostic verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with whole-cell model repositories
    #[command(
        help_template = HELP_TEMPLATE,
        after_help = "Known model repositories:\n  mycoplasma-pneumoniae\n  mycoplasma-genitalium"
    )]
    Model,

    /// Tools for building whole-cell models and their inputs
    #[command(help_template = HELP_TEMPLATE)]
    Tool {
        #[command(subcommand)]
        command: Option<ToolCommands>,
    },

    /// Generate shell completions
    #[command(help_template = HELP_TEMPLATE)]
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Tool groups fronting the external modeling libraries
#[derive(Subcommand, Debug)]
pub enum ToolCommands {
    /// Knowledge base tools
    #[command(help_template = HELP_TEMPLATE)]
    Kb,

    /// Model definition language tools
    #[command(help_template = HELP_TEMPLATE)]
    Lang {
        #[command(subcommand)]
        command: Option<LangCommands>,
    },

    /// Simulation tools
    #[command(help_template = HELP_TEMPLATE)]
    Sim,
}

#[derive(Subcommand, Debug)]
pub enum LangCommands {
    /// Create a template model definition workbook
    #[command(help_template = HELP_TEMPLATE)]
    CreateTemplate {
        /// Where to write the template
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,

        /// Skip reading repository metadata from the enclosing checkout
        #[arg(long)]
        ignore_repo_metadata: bool,
    },
}
