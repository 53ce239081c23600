//! Affiliation registry

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Affiliation, ContestantId},
    utils::validation::validate_tsv_field,
};

/// Read-only query the registry needs before deleting an affiliation
#[cfg_attr(test, mockall::automock)]
pub trait AffiliationReferences {
    /// Some live contestant that belongs to `key`
    fn member_of(&self, key: &str) -> Option<ContestantId>;

    /// Number of live contestants that belong to `key`
    fn member_count(&self, key: &str) -> usize;
}

/// Affiliations by key, in the order they were added
#[derive(Debug, Clone, Default)]
pub struct AffiliationRegistry {
    entries: IndexMap<String, String>,
}

impl AffiliationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, key: &str, fullname: &str) -> AppResult<Affiliation> {
        if key.is_empty() {
            return Err(AppError::Validation(
                "affiliation key must not be empty".to_string(),
            ));
        }
        for value in [key, fullname] {
            validate_tsv_field(value)
                .map_err(|reason| AppError::InvalidFormat(format!("affiliation {value:?}: {reason}")))?;
        }
        if self.entries.contains_key(key) {
            return Err(AppError::AlreadyExists(format!("affiliation {key}")));
        }

        self.entries.insert(key.to_string(), fullname.to_string());
        Ok(Affiliation::new(key, fullname))
    }

    /// Delete an affiliation no live contestant refers to
    pub fn remove(
        &mut self,
        key: &str,
        references: &impl AffiliationReferences,
    ) -> AppResult<Affiliation> {
        if !self.entries.contains_key(key) {
            return Err(AppError::NotFound(format!("Affiliation {key}")));
        }
        if let Some(member) = references.member_of(key) {
            return Err(AppError::AffiliationInUse {
                key: key.to_string(),
                member,
            });
        }

        let fullname = self
            .entries
            .shift_remove(key)
            .ok_or_else(|| AppError::Internal(format!("affiliation {key} vanished")))?;
        Ok(Affiliation::new(key, fullname))
    }

    pub fn fullname(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
