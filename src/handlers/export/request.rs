//! Export request arguments

use clap::Args;

use crate::models::ContestantId;

/// DOMjudge export request
#[derive(Debug, Args)]
pub struct DomjudgeExportRequest {
    /// Export a single contestant under `personal/`
    #[arg(long)]
    pub contestant: Option<ContestantId>,
}
