//! Business logic services
//!
//! In-memory registries and pools. Nothing here touches the filesystem;
//! persistence lives in `storage`.

pub mod affiliations;
pub mod contestants;
pub mod seats;
pub mod team_ids;

pub use affiliations::{AffiliationReferences, AffiliationRegistry};
pub use contestants::{BatchOutcome, ContestantRegistry};
pub use seats::{SeatPool, SeatRequest};
pub use team_ids::TeamIdPool;
