//! Contestant management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use clap::Subcommand;

use super::{Context, Output};
use crate::error::AppResult;

/// Contestant commands
#[derive(Debug, Subcommand)]
pub enum ContestantCommand {
    /// Add a contestant
    Add(AddContestantRequest),
    /// Import contestants from a TSV file
    Import(ImportContestantsRequest),
    /// Remove a contestant
    Remove(ContestantIdRequest),
    /// Show one or all contestants
    Show(ShowContestantsRequest),
    /// Seat a contestant
    Seat(SeatContestantRequest),
    /// Seat all unseated contestants
    #[command(name = "seatall")]
    SeatAll(SeatAllRequest),
    /// Unseat a contestant
    Unseat(ContestantIdRequest),
    /// Unseat all seated contestants
    #[command(name = "unseatall")]
    UnseatAll,
    /// Generate a password for one or all contestants
    #[command(name = "genpass")]
    GeneratePassword(GeneratePasswordRequest),
}

pub fn run(ctx: &Context, command: ContestantCommand) -> AppResult<Output> {
    match command {
        ContestantCommand::Add(req) => Output::new(&handler::add_contestant(ctx, req)?),
        ContestantCommand::Import(req) => {
            let (response, failure) = handler::import_contestants(ctx, req)?;
            Output::partial(&response, failure)
        }
        ContestantCommand::Remove(req) => Output::new(&handler::remove_contestant(ctx, req)?),
        ContestantCommand::Show(req) => Output::new(&handler::show_contestants(ctx, req)?),
        ContestantCommand::Seat(req) => Output::new(&handler::seat_contestant(ctx, req)?),
        ContestantCommand::SeatAll(req) => {
            let (response, failure) = handler::seat_all_contestants(ctx, req)?;
            Output::partial(&response, failure)
        }
        ContestantCommand::Unseat(req) => Output::new(&handler::unseat_contestant(ctx, req)?),
        ContestantCommand::UnseatAll => {
            let (response, failure) = handler::unseat_all_contestants(ctx)?;
            Output::partial(&response, failure)
        }
        ContestantCommand::GeneratePassword(req) => {
            let (response, failure) = handler::generate_passwords(ctx, req)?;
            Output::partial(&response, failure)
        }
    }
}
