//! Flat-file storage
//!
//! Repositories read and write the stores of one contest directory. They
//! hold no state; every call goes straight to the filesystem.

pub mod affiliation_repo;
pub mod contest_repo;
pub mod contestant_repo;
pub mod export_repo;
pub mod seat_repo;
pub mod tsv;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use affiliation_repo::AffiliationRepository;
pub use contest_repo::ContestRepository;
pub use contestant_repo::ContestantRepository;
pub use export_repo::ExportRepository;
pub use seat_repo::SeatRepository;

use crate::{
    constants::{AFFILIATIONS_FILE, CONTEST_FILE, CONTESTANTS_FILE, DATA_DIR, EXPORT_DIR, SEATS_FILE},
    error::{AppError, AppResult},
};

/// Paths of one contest directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestDir {
    root: PathBuf,
}

impl ContestDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contest_file(&self) -> PathBuf {
        self.root.join(CONTEST_FILE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn contestants_file(&self) -> PathBuf {
        self.data_dir().join(CONTESTANTS_FILE)
    }

    pub fn seats_file(&self) -> PathBuf {
        self.data_dir().join(SEATS_FILE)
    }

    pub fn affiliations_file(&self) -> PathBuf {
        self.data_dir().join(AFFILIATIONS_FILE)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.root.join(EXPORT_DIR)
    }

    /// Whether a contest has been created here
    pub fn is_initialized(&self) -> bool {
        self.contest_file().is_file()
    }

    /// Create the directory and its data directory
    ///
    /// Fails if the root already exists so an existing contest is never
    /// overwritten.
    pub fn create(&self) -> AppResult<()> {
        if self.root.exists() {
            return Err(AppError::AlreadyExists(format!(
                "contest directory {}",
                self.root.display()
            )));
        }
        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}
