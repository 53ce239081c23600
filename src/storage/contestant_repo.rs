//! Contestant repository

use std::{fs, io::ErrorKind, path::Path};

use super::{ContestDir, tsv};
use crate::{
    error::{AppError, AppResult},
    models::{Contestant, NewContestant},
    services::ContestantRegistry,
};

/// Repository for `data/contestants.json` and contestant import files
pub struct ContestantRepository;

impl ContestantRepository {
    /// Stored records in file order; a missing store has none
    pub fn load(dir: &ContestDir) -> AppResult<Vec<Contestant>> {
        let path = dir.contestants_file();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text)
            .map_err(|err| AppError::InvalidFormat(format!("{}: {err}", path.display())))
    }

    pub fn save(dir: &ContestDir, registry: &ContestantRegistry) -> AppResult<()> {
        let records: Vec<&Contestant> = registry.iter().collect();
        let mut text = serde_json::to_string_pretty(&records)?;
        text.push('\n');
        fs::write(dir.contestants_file(), text)?;
        tracing::debug!(count = records.len(), "contestants saved");
        Ok(())
    }

    /// Read `name<TAB>sid<TAB>affiliation` rows from an import file
    pub fn read_import(path: &Path) -> AppResult<Vec<NewContestant>> {
        if !path.is_file() {
            return Err(AppError::NotFound(format!("Import file {}", path.display())));
        }
        let rows = tsv::read(path, 3)?;
        rows.into_iter()
            .map(|row| {
                let name = row.fields[0].trim();
                if name.is_empty() {
                    return Err(AppError::InvalidFormat(format!(
                        "{}:{}: contestant name must not be empty",
                        path.display(),
                        row.line
                    )));
                }
                Ok(NewContestant::new(name, row.fields[1].trim(), row.fields[2].trim()))
            })
            .collect()
    }
}
