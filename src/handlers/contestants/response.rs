//! Contestant responses

use std::fmt;

use serde::Serialize;

use crate::{
    models::{Contest, Contestant, ContestantId, Seat, TeamId},
    services::{AffiliationRegistry, BatchOutcome},
};

/// One contestant as shown to the operator
#[derive(Debug, Serialize)]
pub struct ContestantResponse {
    pub id: ContestantId,
    pub team_id: TeamId,
    pub account: String,
    pub name: String,
    pub sid: String,
    pub affiliation: String,
    pub affiliation_name: Option<String>,
    pub seat: Option<Seat>,
    pub has_password: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ContestantResponse {
    pub fn new(
        contestant: &Contestant,
        contest: &Contest,
        affiliations: &AffiliationRegistry,
        show_password: bool,
    ) -> Self {
        Self {
            id: contestant.id,
            team_id: contestant.team_id,
            account: contest.account_name(contestant.team_id),
            name: contestant.name.clone(),
            sid: contestant.student_id.clone(),
            affiliation: contestant.affiliation.clone(),
            affiliation_name: affiliations.fullname(&contestant.affiliation).map(str::to_string),
            seat: contestant.seat.clone(),
            has_password: contestant.has_password(),
            password: if show_password {
                contestant.password.clone()
            } else {
                None
            },
        }
    }
}

impl fmt::Display for ContestantResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seat = self
            .seat
            .as_ref()
            .map_or_else(|| "unseated".to_string(), |s| format!("[{s}]"));
        write!(
            f,
            "#{} team {} ({}) {} sid={} {} {}",
            self.id,
            self.team_id,
            self.account,
            self.name,
            if self.sid.is_empty() { "-" } else { &self.sid },
            self.affiliation_name.as_deref().unwrap_or(&self.affiliation),
            seat
        )?;
        match (&self.password, self.has_password) {
            (Some(password), _) => write!(f, " password={password}"),
            (None, false) => write!(f, " no password"),
            (None, true) => Ok(()),
        }
    }
}

/// Several contestants
#[derive(Debug, Serialize)]
pub struct ContestantsListResponse {
    pub contestants: Vec<ContestantResponse>,
    pub total: usize,
}

impl fmt::Display for ContestantsListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contestant in &self.contestants {
            writeln!(f, "{contestant}")?;
        }
        write!(f, "{} contestant(s)", self.total)
    }
}

/// Removed contestant
#[derive(Debug, Serialize)]
pub struct ContestantRemovedResponse {
    pub id: ContestantId,
    pub team_id: TeamId,
    pub name: String,
    pub released_seat: Option<Seat>,
}

impl fmt::Display for ContestantRemovedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Removed contestant #{} {} (team {} released", self.id, self.name, self.team_id)?;
        if let Some(seat) = &self.released_seat {
            write!(f, ", seat [{seat}] released")?;
        }
        write!(f, ")")
    }
}

/// Seat change of one contestant
#[derive(Debug, Serialize)]
pub struct SeatChangeResponse {
    pub id: ContestantId,
    pub seat: Option<Seat>,
}

impl fmt::Display for SeatChangeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.seat {
            Some(seat) => write!(f, "Contestant #{} seated at [{seat}]", self.id),
            None => write!(f, "Contestant #{} unseated", self.id),
        }
    }
}

/// Result of an operation over many contestants
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub action: &'static str,
    pub processed: usize,
    pub ids: Vec<ContestantId>,
    pub complete: bool,
}

impl BatchResponse {
    pub fn new(action: &'static str, outcome: &BatchOutcome) -> Self {
        Self {
            action,
            processed: outcome.count(),
            ids: outcome.processed.clone(),
            complete: outcome.is_complete(),
        }
    }
}

impl fmt::Display for BatchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} contestant(s)", self.action, self.processed)?;
        if !self.complete {
            write!(f, " before stopping")?;
        }
        Ok(())
    }
}
