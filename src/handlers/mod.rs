//! Command handlers
//!
//! This module contains all command handlers organized by domain. Each
//! domain exposes a clap subcommand enum and a `run` function that routes
//! it to its handler.

pub mod affiliations;
pub mod contest;
pub mod contestants;
pub mod export;
pub mod seats;

use std::fmt::Display;

use clap::Subcommand;
use serde::Serialize;

use crate::{
    config::PasswordConfig,
    error::{AppError, AppResult},
    state::Session,
    storage::ContestDir,
    utils::PasswordPolicy,
};

/// What every handler needs besides its request
#[derive(Debug, Clone)]
pub struct Context {
    pub dir: ContestDir,
    pub password: PasswordConfig,
}

impl Context {
    /// Load the contest this invocation works on
    pub fn session(&self) -> AppResult<Session> {
        Session::load(self.dir.clone())
    }

    pub fn password_policy(&self) -> AppResult<PasswordPolicy> {
        PasswordPolicy::new(&self.password.alphabet, self.password.length)
    }
}

/// Rendered command result, printed as text or JSON by `main`
///
/// A batch that stopped early still has output for the part that was
/// committed; `failure` carries the error that stopped it.
#[derive(Debug)]
pub struct Output {
    pub text: String,
    pub json: serde_json::Value,
    pub failure: Option<AppError>,
}

impl Output {
    pub fn new<T: Serialize + Display>(response: &T) -> AppResult<Self> {
        Ok(Self {
            text: response.to_string(),
            json: serde_json::to_value(response)?,
            failure: None,
        })
    }

    pub fn partial<T: Serialize + Display>(response: &T, failure: Option<AppError>) -> AppResult<Self> {
        Ok(Self {
            failure,
            ..Self::new(response)?
        })
    }
}

/// Top-level command groups
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create, inspect and lock the contest
    #[command(subcommand)]
    Contest(contest::ContestCommand),

    /// Manage contestants, their seats and passwords
    #[command(subcommand)]
    Contestant(contestants::ContestantCommand),

    /// Manage seats and look up who sits where
    #[command(subcommand)]
    Seat(seats::SeatCommand),

    /// Manage affiliations
    #[command(subcommand)]
    Affiliation(affiliations::AffiliationCommand),

    /// Export the roster for other systems
    #[command(subcommand)]
    Export(export::ExportCommand),
}

/// Route a parsed command to its handler
pub fn dispatch(ctx: &Context, command: Command) -> AppResult<Output> {
    match command {
        Command::Contest(cmd) => contest::run(ctx, cmd),
        Command::Contestant(cmd) => contestants::run(ctx, cmd),
        Command::Seat(cmd) => seats::run(ctx, cmd),
        Command::Affiliation(cmd) => affiliations::run(ctx, cmd),
        Command::Export(cmd) => export::run(ctx, cmd),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::constants::DEFAULT_PASSWORD_ALPHABET;

    /// Context over a fresh, not yet created contest directory
    pub fn context(tmp: &tempfile::TempDir) -> Context {
        Context {
            dir: ContestDir::new(tmp.path().join("contest")),
            password: PasswordConfig {
                alphabet: DEFAULT_PASSWORD_ALPHABET.to_string(),
                length: 8,
            },
        }
    }
}
