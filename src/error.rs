//! Custom error types and handling
//!
//! This module defines the application's error type, its mapping onto the
//! coarse error taxonomy used by the command layer, and process exit codes.

use serde::Serialize;

use crate::config::ConfigError;
use crate::models::{ContestantId, Seat, TeamId};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Lookup errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown affiliation: {0}")]
    UnknownAffiliation(String),

    // Identity errors
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Duplicate contestant: name={name} sid={student_id} affiliation={affiliation}")]
    DuplicateContestant {
        name: String,
        student_id: String,
        affiliation: String,
    },

    // Format errors
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Capacity errors
    #[error("No available team id")]
    TeamIdExhausted,

    #[error("No available seat")]
    NoAvailableSeat,

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    // State errors
    #[error("Team id {0} is not in the valid range")]
    TeamIdOutOfRange(TeamId),

    #[error("Seat [{seat}] is already occupied by contestant {occupant}")]
    SeatOccupied { seat: Seat, occupant: ContestantId },

    #[error("Seat [{seat}] is still occupied by contestant {occupant}")]
    SeatStillOccupied { seat: Seat, occupant: ContestantId },

    #[error("Contestant {id} is already seated at [{seat}]")]
    AlreadySeated { id: ContestantId, seat: Seat },

    #[error("Contestant {0} does not have a seat yet")]
    NotSeated(ContestantId),

    #[error("Contestant {0} already has a password")]
    PasswordExists(ContestantId),

    #[error("Affiliation {key} still has members such as contestant {member}")]
    AffiliationInUse { key: String, member: ContestantId },

    #[error("Contest is locked")]
    ContestLocked,

    #[error("Aborted: {0}")]
    Aborted(String),

    // Invariant violations
    #[error("Unexpected: team id {0} is already available")]
    TeamIdAlreadyFree(TeamId),

    #[error("Unexpected: seat [{0}] is already free")]
    SeatAlreadyFree(Seat),

    #[error("Internal error: {0}")]
    Internal(String),

    // Storage errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Coarse error classes the command layer reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Duplicate,
    InvalidFormat,
    CapacityExceeded,
    PreconditionFailed,
    InternalInvariant,
    Io,
}

/// Error body for `--json` output
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    /// Get the error class for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::UnknownAffiliation(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) | Self::DuplicateContestant { .. } => ErrorKind::Duplicate,
            Self::InvalidFormat(_) | Self::Validation(_) => ErrorKind::InvalidFormat,
            Self::TeamIdExhausted | Self::NoAvailableSeat | Self::CapacityExceeded(_) => {
                ErrorKind::CapacityExceeded
            }
            Self::TeamIdOutOfRange(_)
            | Self::SeatOccupied { .. }
            | Self::SeatStillOccupied { .. }
            | Self::AlreadySeated { .. }
            | Self::NotSeated(_)
            | Self::PasswordExists(_)
            | Self::AffiliationInUse { .. }
            | Self::ContestLocked
            | Self::Aborted(_) => ErrorKind::PreconditionFailed,
            Self::TeamIdAlreadyFree(_) | Self::SeatAlreadyFree(_) | Self::Internal(_) => {
                ErrorKind::InternalInvariant
            }
            Self::Io(_) | Self::Serialization(_) | Self::Configuration(_) => ErrorKind::Io,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::UnknownAffiliation(_) => "UNKNOWN_AFFILIATION",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::DuplicateContestant { .. } => "DUPLICATE_CONTESTANT",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::TeamIdExhausted => "TEAM_ID_EXHAUSTED",
            Self::NoAvailableSeat => "NO_AVAILABLE_SEAT",
            Self::CapacityExceeded(_) => "CAPACITY_EXCEEDED",
            Self::TeamIdOutOfRange(_) => "TEAM_ID_OUT_OF_RANGE",
            Self::SeatOccupied { .. } => "SEAT_OCCUPIED",
            Self::SeatStillOccupied { .. } => "SEAT_STILL_OCCUPIED",
            Self::AlreadySeated { .. } => "ALREADY_SEATED",
            Self::NotSeated(_) => "NOT_SEATED",
            Self::PasswordExists(_) => "PASSWORD_EXISTS",
            Self::AffiliationInUse { .. } => "AFFILIATION_IN_USE",
            Self::ContestLocked => "CONTEST_LOCKED",
            Self::Aborted(_) => "ABORTED",
            Self::TeamIdAlreadyFree(_) => "TEAM_ID_ALREADY_FREE",
            Self::SeatAlreadyFree(_) => "SEAT_ALREADY_FREE",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the process exit status for this error
    ///
    /// Follows the BSD `sysexits` convention for the non-user classes.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 78,
            _ => match self.kind() {
                ErrorKind::InternalInvariant => 70,
                ErrorKind::Io => 74,
                _ => 1,
            },
        }
    }

    /// Whether this error signals a bug rather than a user mistake
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::InternalInvariant
    }

    /// Build the `--json` body for this error
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetails {
                code: self.error_code(),
                kind: self.kind(),
                message: self.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
