//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod affiliation;
pub mod contest;
pub mod contestant;
pub mod seat;
pub mod team_id;

pub use affiliation::*;
pub use contest::*;
pub use contestant::*;
pub use seat::*;
pub use team_id::*;
