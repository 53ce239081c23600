//! Contest responses

use std::fmt;

use serde::Serialize;

use crate::models::{Contest, Readiness, RoomOccupancy, TeamIdRange};

/// Contest created response
#[derive(Debug, Serialize)]
pub struct ContestCreatedResponse {
    pub directory: String,
    pub title: String,
    pub team_category_ids: Vec<u32>,
    pub team_id_range: TeamIdRange,
    pub account_prefix: String,
}

impl fmt::Display for ContestCreatedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Created contest \"{}\" in {}", self.title, self.directory)
    }
}

/// Readiness summary
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub issues: Vec<&'static str>,
    pub contestants: usize,
    pub seated: usize,
    pub with_password: usize,
}

impl From<Readiness> for ReadinessResponse {
    fn from(readiness: Readiness) -> Self {
        Self {
            ready: readiness.is_ready(),
            issues: readiness.issues(),
            contestants: readiness.contestants,
            seated: readiness.seated,
            with_password: readiness.with_password,
        }
    }
}

impl fmt::Display for ReadinessResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ready {
            write!(f, "[Ready]")
        } else {
            write!(f, "[Not Ready] (issue: {})", self.issues.join(", "))
        }
    }
}

/// Contest overview
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub title: String,
    pub locked: bool,
    pub team_category_ids: Vec<u32>,
    pub team_id_range: TeamIdRange,
    pub free_team_ids: usize,
    pub account_prefix: String,
    pub affiliation_count: usize,
    pub rooms: Vec<RoomOccupancy>,
    pub seat_count: usize,
    pub contestant_count: usize,
    pub capacity: usize,
    pub readiness: ReadinessResponse,
}

impl fmt::Display for ContestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories: Vec<String> = self.team_category_ids.iter().map(u32::to_string).collect();
        let rooms: Vec<String> = self.rooms.iter().map(ToString::to_string).collect();

        writeln!(f, "title:               {}", self.title)?;
        writeln!(f, "lock state:          {}", lock_label(self.locked))?;
        writeln!(f, "team categories:     {}", categories.join(","))?;
        writeln!(
            f,
            "team id range:       {} ({} free)",
            self.team_id_range, self.free_team_ids
        )?;
        writeln!(f, "account prefix:      {}", self.account_prefix)?;
        writeln!(f, "affiliations:        {}", self.affiliation_count)?;
        writeln!(f, "rooms:               {}", rooms.join(" "))?;
        writeln!(f, "seats:               {}", self.seat_count)?;
        writeln!(f, "contestants:         [{} / {}]", self.contestant_count, self.capacity)?;
        writeln!(
            f,
            "seat state:          [{} / {}]",
            self.readiness.seated, self.readiness.contestants
        )?;
        writeln!(
            f,
            "password state:      [{} / {}]",
            self.readiness.with_password, self.readiness.contestants
        )?;
        write!(f, "ready state:         {}", self.readiness)
    }
}

/// Lock state change
#[derive(Debug, Serialize)]
pub struct LockResponse {
    pub locked: bool,
    pub changed: bool,
}

impl fmt::Display for LockResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed {
            write!(f, "Contest is now {}", lock_label(self.locked))
        } else {
            write!(f, "Contest is already {}", lock_label(self.locked))
        }
    }
}

fn lock_label(locked: bool) -> &'static str {
    if locked { "[Locked]" } else { "[Unlocked]" }
}

impl ContestCreatedResponse {
    pub fn new(directory: String, contest: &Contest) -> Self {
        Self {
            directory,
            title: contest.title.clone(),
            team_category_ids: contest.team_category_ids.clone(),
            team_id_range: contest.team_id_range,
            account_prefix: contest.account_prefix.clone(),
        }
    }
}
