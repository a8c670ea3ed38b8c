//! CLI argument parsing for prwd.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! actions themselves live in `main.rs`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Prwd: render a shell prompt from a `${command}` template.
///
/// Without options the template from the config file is rendered and
/// printed. Set `PS1='$(prwd) '` to use it as a prompt.
#[derive(Parser, Debug)]
#[command(name = "prwd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Render this template instead of the configured one.
    #[arg(short = 't', long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Config file to read instead of ~/.prwd.yaml.
    #[arg(short = 'c', long, value_name = "CONFIG", env = "PRWD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print `export` lines for every `$` alias, for use with `eval`.
    #[arg(short = 'a', long = "aliases", conflicts_with = "find_root")]
    pub aliases: bool,

    /// Print the nearest project root, optionally the nearest directory
    /// containing TARGET.
    #[arg(
        short = 'f',
        long = "find-root",
        value_name = "TARGET",
        num_args = 0..=1
    )]
    pub find_root: Option<Option<String>>,

    /// Log more (-v for info, -vv for debug). Logs go to stderr.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a run of prwd does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Render the prompt.
    Render,
    /// Print alias exports.
    ExportAliases,
    /// Print the project root.
    FindRoot(Option<String>),
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn action(&self) -> Action {
        if self.aliases {
            Action::ExportAliases
        } else if let Some(target) = &self.find_root {
            Action::FindRoot(target.clone())
        } else {
            Action::Render
        }
    }
}
