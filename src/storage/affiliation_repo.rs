//! Affiliation repository

use std::path::Path;

use super::{ContestDir, tsv};
use crate::{
    error::{AppError, AppResult},
    services::AffiliationRegistry,
};

/// Repository for `data/affiliations.tsv` and affiliation import files
pub struct AffiliationRepository;

impl AffiliationRepository {
    pub fn load(dir: &ContestDir) -> AppResult<AffiliationRegistry> {
        let path = dir.affiliations_file();
        let mut registry = AffiliationRegistry::new();
        for (line, key, fullname) in Self::read(&path)? {
            registry.create(&key, &fullname).map_err(|err| {
                AppError::InvalidFormat(format!("{}:{line}: {err}", path.display()))
            })?;
        }
        Ok(registry)
    }

    pub fn save(dir: &ContestDir, registry: &AffiliationRegistry) -> AppResult<()> {
        tsv::write(
            &dir.affiliations_file(),
            registry.iter().map(|(key, fullname)| [key, fullname]),
        )
    }

    /// Read `(line, key, fullname)` rows from a TSV file
    pub fn read(path: &Path) -> AppResult<Vec<(usize, String, String)>> {
        Ok(tsv::read(path, 2)?
            .into_iter()
            .map(|row| {
                let mut fields = row.fields.into_iter();
                let key = fields.next().unwrap_or_default();
                let fullname = fields.next().unwrap_or_default();
                (row.line, key, fullname)
            })
            .collect())
    }
}
