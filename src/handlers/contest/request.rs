//! Contest request arguments

use std::path::PathBuf;

use clap::Args;
use validator::Validate;

use crate::constants::MAX_CONTEST_TITLE_LENGTH;

/// Create contest request
#[derive(Debug, Args, Validate)]
pub struct CreateContestRequest {
    /// Directory to create the contest in; must not exist yet
    pub directory: PathBuf,

    /// Contest title
    #[arg(long)]
    #[validate(length(min = 1, max = MAX_CONTEST_TITLE_LENGTH))]
    pub title: String,

    /// Team category ids, comma separated without spaces (e.g. "3,4")
    #[arg(long = "categories")]
    #[validate(length(min = 1))]
    pub team_category_ids: String,

    /// Team id range "<lo>-<hi>"
    #[arg(long = "team-ids")]
    pub team_id_range: String,

    /// Prefix of DOMjudge account names; spaces become underscores
    #[arg(long, default_value = "")]
    pub account_prefix: String,
}

/// Unlock contest request
#[derive(Debug, Args)]
pub struct UnlockContestRequest {
    /// Confirm that the roster may change again
    #[arg(long)]
    pub yes: bool,
}
