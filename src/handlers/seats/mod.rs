//! Seat management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use clap::Subcommand;

use super::{Context, Output};
use crate::error::AppResult;

/// Seat commands
#[derive(Debug, Subcommand)]
pub enum SeatCommand {
    /// Add a seat
    Add(AddSeatRequest),
    /// Import seats from a TSV file
    Import(ImportSeatsRequest),
    /// Remove a free seat
    Remove(SeatRefRequest),
    /// Show who is using a seat
    Show(SeatRefRequest),
    /// Show where a team is seated
    Where(WhereRequest),
    /// List seats and their occupants
    List(ListSeatsRequest),
}

pub fn run(ctx: &Context, command: SeatCommand) -> AppResult<Output> {
    match command {
        SeatCommand::Add(req) => Output::new(&handler::add_seat(ctx, req)?),
        SeatCommand::Import(req) => Output::new(&handler::import_seats(ctx, req)?),
        SeatCommand::Remove(req) => Output::new(&handler::remove_seat(ctx, req)?),
        SeatCommand::Show(req) => Output::new(&handler::show_seat(ctx, req)?),
        SeatCommand::Where(req) => Output::new(&handler::locate_team(ctx, req)?),
        SeatCommand::List(req) => Output::new(&handler::list_seats(ctx, req)?),
    }
}
