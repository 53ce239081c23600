//! Export handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use clap::Subcommand;

use super::{Context, Output};
use crate::error::AppResult;

/// Export commands
#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Export accounts.tsv and teams.json for DOMjudge
    Domjudge(DomjudgeExportRequest),
}

pub fn run(ctx: &Context, command: ExportCommand) -> AppResult<Output> {
    match command {
        ExportCommand::Domjudge(req) => Output::new(&handler::export_domjudge(ctx, req)?),
    }
}
