//! Contestant request arguments

use std::{collections::BTreeSet, path::PathBuf};

use clap::Args;
use validator::Validate;

use crate::{
    constants::MAX_NAME_LENGTH,
    error::AppResult,
    models::{ContestantId, Seat},
    services::SeatRequest,
};

/// Where to seat a contestant
#[derive(Debug, Clone, Default, Args)]
pub struct SeatArgs {
    /// Take this seat, written "<room>-<seat id>"
    #[arg(long, conflicts_with_all = ["random", "rooms"])]
    pub seat: Option<String>,

    /// Pick a random free seat instead of the lowest one
    #[arg(long)]
    pub random: bool,

    /// Only consider seats in this room (repeatable)
    #[arg(long = "room")]
    pub rooms: Vec<String>,
}

impl SeatArgs {
    pub fn is_manual(&self) -> bool {
        self.seat.is_some()
    }

    /// Whether any automatic seating option was given
    pub fn has_auto_options(&self) -> bool {
        self.random || !self.rooms.is_empty()
    }

    pub fn room_filter(&self) -> Option<BTreeSet<String>> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(self.rooms.iter().cloned().collect())
        }
    }

    pub fn to_request(&self) -> AppResult<SeatRequest> {
        match &self.seat {
            Some(text) => Ok(SeatRequest::Manual(Seat::decode(text)?)),
            None => Ok(SeatRequest::Auto {
                random: self.random,
                rooms: self.room_filter(),
            }),
        }
    }
}

/// Add contestant request
#[derive(Debug, Args, Validate)]
pub struct AddContestantRequest {
    /// Contestant name
    #[arg(long)]
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    /// Student id
    #[arg(long, default_value = "")]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub sid: String,

    /// Affiliation key
    #[arg(long)]
    #[validate(length(min = 1))]
    pub affiliation: String,

    /// Seat the contestant automatically
    #[arg(long)]
    pub auto_seat: bool,

    #[command(flatten)]
    pub seat: SeatArgs,

    /// Do not generate a password
    #[arg(long)]
    pub no_password: bool,
}

impl AddContestantRequest {
    /// Seating requested by the flags, if any
    pub fn seat_request(&self) -> AppResult<Option<SeatRequest>> {
        if self.seat.is_manual() || self.auto_seat || self.seat.has_auto_options() {
            self.seat.to_request().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Import contestants request
#[derive(Debug, Args)]
pub struct ImportContestantsRequest {
    /// TSV file with name, student id and affiliation key per line
    pub file: PathBuf,

    /// Do not generate passwords for imported contestants
    #[arg(long)]
    pub no_password: bool,
}

/// Request naming one contestant
#[derive(Debug, Args)]
pub struct ContestantIdRequest {
    /// Contestant id
    pub id: ContestantId,
}

/// Show contestants request
#[derive(Debug, Args)]
pub struct ShowContestantsRequest {
    /// Contestant id; all contestants when omitted
    pub id: Option<ContestantId>,

    /// Include passwords in the output
    #[arg(long)]
    pub show_password: bool,
}

/// Seat one contestant request
#[derive(Debug, Args)]
pub struct SeatContestantRequest {
    /// Contestant id
    pub id: ContestantId,

    #[command(flatten)]
    pub seat: SeatArgs,

    /// Replace an existing seat
    #[arg(long = "override")]
    pub override_seat: bool,
}

/// Seat every unseated contestant request
#[derive(Debug, Args)]
pub struct SeatAllRequest {
    /// Pick random free seats instead of the lowest ones
    #[arg(long)]
    pub random: bool,

    /// Only consider seats in this room (repeatable)
    #[arg(long = "room")]
    pub rooms: Vec<String>,
}

/// Generate passwords request
#[derive(Debug, Args)]
pub struct GeneratePasswordRequest {
    /// Contestant id; every contestant when omitted
    pub id: Option<ContestantId>,

    /// Replace existing passwords
    #[arg(long = "override")]
    pub override_password: bool,
}
