//! Roster - Contest roster management
//!
//! This library provides the core functionality of `roster`, a command line
//! tool that manages the contestants of a programming contest: their team
//! ids, seats, affiliations and passwords, and exports them for DOMjudge.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: CLI commands (thin layer)
//! - **Services**: In-memory pools and registries
//! - **Storage**: Flat-file repositories of a contest directory
//! - **Models**: Domain models and persisted records

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::Session;
