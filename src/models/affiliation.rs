//! Affiliation model

use serde::Serialize;

/// Organization a contestant belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affiliation {
    /// Short key (DOMjudge external id)
    pub key: String,
    pub fullname: String,
}

impl Affiliation {
    pub fn new(key: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fullname: fullname.into(),
        }
    }
}
