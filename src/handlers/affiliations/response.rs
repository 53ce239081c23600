//! Affiliation responses

use std::fmt;

use serde::Serialize;

/// Affiliation with its member count
#[derive(Debug, Serialize)]
pub struct AffiliationResponse {
    pub key: String,
    pub fullname: String,
    pub members: usize,
}

impl fmt::Display for AffiliationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} ({} contestant(s))", self.key, self.fullname, self.members)
    }
}

/// Several affiliations
#[derive(Debug, Serialize)]
pub struct AffiliationsListResponse {
    pub affiliations: Vec<AffiliationResponse>,
    pub total: usize,
}

impl fmt::Display for AffiliationsListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for affiliation in &self.affiliations {
            writeln!(f, "{affiliation}")?;
        }
        write!(f, "{} affiliation(s)", self.total)
    }
}

/// Affiliations added or removed
#[derive(Debug, Serialize)]
pub struct AffiliationUpdateResponse {
    pub action: &'static str,
    pub keys: Vec<String>,
    pub total: usize,
}

impl fmt::Display for AffiliationUpdateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keys.as_slice() {
            [key] => write!(f, "Affiliation {key} {}", self.action)?,
            keys => write!(f, "{} affiliation(s) {}", keys.len(), self.action)?,
        }
        write!(f, ", {} in total", self.total)
    }
}
