//! Contest management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use clap::Subcommand;

use super::{Context, Output};
use crate::error::AppResult;

/// Contest commands
#[derive(Debug, Subcommand)]
pub enum ContestCommand {
    /// Create a new contest directory
    Create(CreateContestRequest),
    /// Show the contest overview
    Show,
    /// Show whether the roster is ready for the contest
    Ready,
    /// Lock the contest
    Lock,
    /// Unlock the contest
    Unlock(UnlockContestRequest),
}

pub fn run(ctx: &Context, command: ContestCommand) -> AppResult<Output> {
    match command {
        ContestCommand::Create(req) => Output::new(&handler::create_contest(req)?),
        ContestCommand::Show => Output::new(&handler::show_contest(ctx)?),
        ContestCommand::Ready => Output::new(&handler::contest_readiness(ctx)?),
        ContestCommand::Lock => Output::new(&handler::lock_contest(ctx)?),
        ContestCommand::Unlock(req) => Output::new(&handler::unlock_contest(ctx, req)?),
    }
}
