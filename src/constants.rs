//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// CONTEST DIRECTORY LAYOUT
// =============================================================================

/// Contest configuration file, relative to the contest directory
pub const CONTEST_FILE: &str = "contest.yaml";

/// Data directory holding the roster stores
pub const DATA_DIR: &str = "data";

/// Contestant store inside the data directory
pub const CONTESTANTS_FILE: &str = "contestants.json";

/// Seat store inside the data directory
pub const SEATS_FILE: &str = "seats.tsv";

/// Affiliation store inside the data directory
pub const AFFILIATIONS_FILE: &str = "affiliations.tsv";

/// Export output directory
pub const EXPORT_DIR: &str = "export";

// =============================================================================
// CONFIGURATION DEFAULTS
// =============================================================================

/// Default contest directory
pub const DEFAULT_CONTEST_DIR: &str = ".";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// PASSWORD DEFAULTS
// =============================================================================

/// Default password alphabet: lowercase ASCII letters and digits
pub const DEFAULT_PASSWORD_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Default generated password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Upper bound on generated password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

// =============================================================================
// TEXT FORMATS
// =============================================================================

/// Separator between room and seat id in the textual seat form
pub const SEAT_SEPARATOR: char = '-';

/// Separator between team category ids in contest.yaml
pub const CATEGORY_SEPARATOR: char = ',';

/// Maximum contest title length
pub const MAX_CONTEST_TITLE_LENGTH: u64 = 256;

/// Maximum contestant name length
pub const MAX_NAME_LENGTH: u64 = 128;

// =============================================================================
// DOMJUDGE EXPORT
// =============================================================================

/// DOMjudge accounts file header
pub const DOMJUDGE_ACCOUNTS_HEADER: [&str; 2] = ["accounts", "1"];

/// DOMjudge account type for contestants
pub const DOMJUDGE_ACCOUNT_TYPE: &str = "team";

/// Timestamp format used to name export history directories
pub const EXPORT_STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Timestamp format written to `timestamp.txt`
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
