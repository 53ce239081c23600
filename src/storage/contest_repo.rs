//! Contest repository

use std::fs;

use super::ContestDir;
use crate::{
    error::{AppError, AppResult},
    models::Contest,
};

/// Repository for `contest.yaml`
pub struct ContestRepository;

impl ContestRepository {
    pub fn load(dir: &ContestDir) -> AppResult<Contest> {
        if !dir.is_initialized() {
            return Err(AppError::NotFound(format!(
                "Contest in {} (run `roster contest create` first)",
                dir.root().display()
            )));
        }
        let path = dir.contest_file();
        let text = fs::read_to_string(&path)?;
        serde_yaml::from_str(&text)
            .map_err(|err| AppError::InvalidFormat(format!("{}: {err}", path.display())))
    }

    pub fn save(dir: &ContestDir, contest: &Contest) -> AppResult<()> {
        fs::write(dir.contest_file(), serde_yaml::to_string(contest)?)?;
        tracing::debug!(path = %dir.contest_file().display(), "contest saved");
        Ok(())
    }
}
