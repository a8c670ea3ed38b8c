//! Prwd: shell prompt renderer.
//!
//! This is the main entry point for the `prwd` CLI. It parses arguments,
//! loads the config, runs the requested action and handles errors with
//! proper exit codes. Only the result goes to stdout; logs and errors go to
//! stderr so a prompt is never polluted.

mod cli;
mod commands;
pub mod alias;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod findr;
pub mod path;
pub mod system;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::{Action, Cli};
use config::Config;
use error::{PrwdError, Result};
use std::process::ExitCode;
use system::HostSystem;
use template::Renderer;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("prwd: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// `PRWD_LOG` takes precedence over `-v`.
fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("PRWD_LOG").unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}

/// Run the requested action and return what goes to stdout.
fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;

    match cli.action() {
        Action::Render => {
            let home = dirs::home_dir();
            let aliases = config.alias_table(home.as_deref())?;
            let template = cli.template.clone().unwrap_or_else(|| config.template());
            debug!(template = %template, aliases = aliases.len(), "rendering");

            let system = HostSystem::new();
            let prompt = Renderer::new(&system, &aliases).render(&template)?;
            Ok(format!("{}\n", prompt))
        }
        Action::ExportAliases => {
            let home = dirs::home_dir();
            let aliases = config.alias_table(home.as_deref())?;
            Ok(aliases
                .export_lines()
                .into_iter()
                .map(|line| line + "\n")
                .collect())
        }
        Action::FindRoot(target) => {
            let cwd = std::env::current_dir().map_err(|e| {
                PrwdError::UserError(format!("unable to get current path: {}", e))
            })?;
            let root = findr::find_root(&cwd, target.as_deref())
                .ok_or_else(|| PrwdError::NotFound("no project root found".to_string()))?;
            Ok(format!("{}\n", root.display()))
        }
    }
}

/// An explicit config file must exist; the default one is optional.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(path),
            None => Ok(Config::default()),
        },
    }
}
