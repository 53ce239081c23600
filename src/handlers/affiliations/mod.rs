//! Affiliation management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use clap::Subcommand;

use super::{Context, Output};
use crate::error::AppResult;

/// Affiliation commands
#[derive(Debug, Subcommand)]
pub enum AffiliationCommand {
    /// Add an affiliation
    Add(AddAffiliationRequest),
    /// Import affiliations from a TSV file
    Import(ImportAffiliationsRequest),
    /// Remove an affiliation by its key
    Remove(AffiliationKeyRequest),
    /// Show one or all affiliations
    Show(ShowAffiliationsRequest),
}

pub fn run(ctx: &Context, command: AffiliationCommand) -> AppResult<Output> {
    match command {
        AffiliationCommand::Add(req) => Output::new(&handler::add_affiliation(ctx, req)?),
        AffiliationCommand::Import(req) => Output::new(&handler::import_affiliations(ctx, req)?),
        AffiliationCommand::Remove(req) => Output::new(&handler::remove_affiliation(ctx, req)?),
        AffiliationCommand::Show(req) => Output::new(&handler::show_affiliations(ctx, req)?),
    }
}
