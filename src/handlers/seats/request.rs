//! Seat request arguments

use std::path::PathBuf;

use clap::Args;

use crate::models::TeamId;

/// Add seat request
#[derive(Debug, Args)]
pub struct AddSeatRequest {
    /// Room name
    pub room: String,

    /// Seat id within the room
    pub seat_id: String,
}

/// Import seats request
#[derive(Debug, Args)]
pub struct ImportSeatsRequest {
    /// TSV file with room and seat id per line
    pub file: PathBuf,
}

/// Request naming one seat
#[derive(Debug, Args)]
pub struct SeatRefRequest {
    /// Seat, written "<room>-<seat id>"
    pub seat: String,
}

/// Team lookup request
#[derive(Debug, Args)]
pub struct WhereRequest {
    /// Team id
    pub team_id: TeamId,
}

/// List seats request
#[derive(Debug, Args)]
pub struct ListSeatsRequest {
    /// Only list this room
    #[arg(long)]
    pub room: Option<String>,
}
