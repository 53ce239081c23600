//! Roster - Application Entry Point

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use roster::{
    AppError,
    config::{Config, LogFormat},
    handlers::{self, Command, Context, Output},
    storage::ContestDir,
};

/// An arrangement system for contestant management and DOMjudge registration
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Contest directory (overrides ROSTER_CONTEST_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Password alphabet (overrides ROSTER_PASSWORD_ALPHABET)
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Password length (overrides ROSTER_PASSWORD_LENGTH)
    #[arg(long, global = true)]
    length: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(config: &Config, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log.rust_log.clone())),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let registry = tracing_subscriber::registry().with(filter);

    match config.log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn print_output(output: &Output, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else if !output.text.is_empty() {
        println!("{}", output.text);
    }
    Ok(())
}

fn print_error(err: &AppError, json: bool) {
    if json {
        match serde_json::to_string_pretty(&err.to_response()) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("error: {err}"),
        }
    } else {
        eprintln!("error: {err}");
    }
    if err.is_internal() {
        tracing::error!(code = err.error_code(), "internal invariant violated: {err}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            print_error(&err, cli.json);
            return ExitCode::from(err.exit_code());
        }
    };
    if let Some(dir) = cli.dir {
        config.contest.root = dir;
    }
    if let Some(alphabet) = cli.alphabet {
        config.password.alphabet = alphabet;
    }
    if let Some(length) = cli.length {
        config.password.length = length;
    }

    init_tracing(&config, cli.verbose);
    tracing::debug!(root = %config.contest.root.display(), "starting roster");

    let ctx = Context {
        dir: ContestDir::new(config.contest.root.clone()),
        password: config.password.clone(),
    };

    let output = match handlers::dispatch(&ctx, cli.command) {
        Ok(output) => output,
        Err(err) => {
            print_error(&err, cli.json);
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = print_output(&output, cli.json) {
        eprintln!("error: {err:#}");
        return ExitCode::from(74);
    }
    match &output.failure {
        Some(err) => {
            print_error(err, cli.json);
            ExitCode::from(err.exit_code())
        }
        None => ExitCode::SUCCESS,
    }
}
