//! Time utilities

use chrono::{DateTime, Local};

use crate::constants::{EXPORT_STAMP_FORMAT, EXPORT_TIMESTAMP_FORMAT};

/// Get current local time
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Directory-safe stamp used to name export history directories
pub fn export_stamp(at: &DateTime<Local>) -> String {
    at.format(EXPORT_STAMP_FORMAT).to_string()
}

/// Human readable stamp written next to exports
pub fn export_timestamp(at: &DateTime<Local>) -> String {
    at.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}
