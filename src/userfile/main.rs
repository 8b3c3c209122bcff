use clap::Parser;
use colored::*;
use std::io;
use tracing_subscriber::EnvFilter;
use userfile::api;
use userfile::config::{default_config_path, Settings};
use userfile::error::Result;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red(), e);
        if e.is_validation() {
            eprintln!("Run with --help to see the allowed flags.");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = api::perform(&cli.arguments(), &settings, &mut out)?;
    tracing::debug!(success = outcome.is_success(), "done");
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match cli.config.clone().or_else(default_config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            Settings::load(path)
        }
        None => Ok(Settings::default()),
    }
}

// Logs go to stderr so stdout carries only the operation's output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
