//! Export responses

use std::fmt;

use serde::Serialize;

/// Files written by an export
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: String,
    pub teams: usize,
    pub ready: bool,
}

impl fmt::Display for ExportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exported {} team(s) to {}", self.teams, self.path)?;
        if !self.ready {
            write!(f, " (roster is not ready)")?;
        }
        Ok(())
    }
}
