//! Seat responses

use std::fmt;

use serde::Serialize;

use crate::models::{Contestant, ContestantId, RoomOccupancy, Seat, TeamId};

/// Who sits on a seat
#[derive(Debug, Serialize)]
pub struct OccupantResponse {
    pub id: ContestantId,
    pub team_id: TeamId,
    pub name: String,
    pub affiliation: String,
}

impl From<&Contestant> for OccupantResponse {
    fn from(contestant: &Contestant) -> Self {
        Self {
            id: contestant.id,
            team_id: contestant.team_id,
            name: contestant.name.clone(),
            affiliation: contestant.affiliation.clone(),
        }
    }
}

/// A seat and its occupant
#[derive(Debug, Serialize)]
pub struct SeatResponse {
    pub seat: Seat,
    pub occupant: Option<OccupantResponse>,
}

impl fmt::Display for SeatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(o) => write!(
                f,
                "[{}] #{} team {} {} ({})",
                self.seat, o.id, o.team_id, o.name, o.affiliation
            ),
            None => write!(f, "[{}] free", self.seat),
        }
    }
}

/// Seats with their occupants and per-room totals
#[derive(Debug, Serialize)]
pub struct SeatsListResponse {
    pub seats: Vec<SeatResponse>,
    pub rooms: Vec<RoomOccupancy>,
}

impl fmt::Display for SeatsListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seat in &self.seats {
            writeln!(f, "{seat}")?;
        }
        let rooms: Vec<String> = self.rooms.iter().map(ToString::to_string).collect();
        write!(f, "{}", rooms.join(" "))
    }
}

/// Seats added or removed
#[derive(Debug, Serialize)]
pub struct SeatUpdateResponse {
    pub action: &'static str,
    pub seats: Vec<Seat>,
    pub total: usize,
}

impl fmt::Display for SeatUpdateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seats.as_slice() {
            [seat] => write!(f, "Seat [{seat}] {}", self.action)?,
            seats => write!(f, "{} seat(s) {}", seats.len(), self.action)?,
        }
        write!(f, ", {} seat(s) in total", self.total)
    }
}

/// Where a team sits
#[derive(Debug, Serialize)]
pub struct TeamLocationResponse {
    pub team_id: TeamId,
    pub contestant: OccupantResponse,
    pub seat: Option<Seat>,
}

impl fmt::Display for TeamLocationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.contestant;
        write!(f, "Team {}: #{} {} ({}) ", self.team_id, c.id, c.name, c.affiliation)?;
        match &self.seat {
            Some(seat) => write!(f, "at [{seat}]"),
            None => write!(f, "is not seated"),
        }
    }
}
