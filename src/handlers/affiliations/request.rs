//! Affiliation request arguments

use std::path::PathBuf;

use clap::Args;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Add affiliation request
#[derive(Debug, Args, Validate)]
pub struct AddAffiliationRequest {
    /// Short key (DOMjudge external id)
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub key: String,

    /// Full name
    #[validate(length(min = 1))]
    pub fullname: String,
}

/// Import affiliations request
#[derive(Debug, Args)]
pub struct ImportAffiliationsRequest {
    /// TSV file with key and full name per line
    pub file: PathBuf,
}

/// Request naming one affiliation
#[derive(Debug, Args)]
pub struct AffiliationKeyRequest {
    /// Affiliation key
    pub key: String,
}

/// Show affiliations request
#[derive(Debug, Args)]
pub struct ShowAffiliationsRequest {
    /// Affiliation key; all affiliations when omitted
    pub key: Option<String>,
}
