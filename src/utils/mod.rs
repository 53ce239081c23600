//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::PasswordPolicy;
pub use time::{export_stamp, export_timestamp, now_local};
pub use validation::{parse_range, sanitize_string, validate_seat_part, validate_seat_text};
