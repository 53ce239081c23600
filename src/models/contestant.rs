//! Contestant model

use serde::{Deserialize, Deserializer, Serialize};

use super::{Seat, TeamId};

/// Contestant id type
pub type ContestantId = u32;

/// Contestant record as kept in `contestants.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub team_id: TeamId,
    pub name: String,
    /// Student id, empty when unknown
    #[serde(rename = "sid", default, deserialize_with = "null_as_empty")]
    pub student_id: String,
    pub affiliation: String,
    #[serde(default)]
    pub seat: Option<Seat>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Contestant {
    pub fn is_seated(&self) -> bool {
        self.seat.is_some()
    }

    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn identity(&self) -> ContestantIdentity {
        ContestantIdentity::new(&self.name, &self.student_id, &self.affiliation)
    }

    /// Whether `other` looks like the same person registered twice
    ///
    /// Same affiliation and either the same name or the same non-empty
    /// student id.
    pub fn resembles(&self, other: &Contestant) -> bool {
        self.affiliation == other.affiliation
            && (self.name == other.name
                || (!self.student_id.is_empty() && self.student_id == other.student_id))
    }
}

/// Uniqueness key of a live contestant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContestantIdentity {
    pub name: String,
    pub student_id: String,
    pub affiliation: String,
}

impl ContestantIdentity {
    pub fn new(name: &str, student_id: &str, affiliation: &str) -> Self {
        Self {
            name: name.to_string(),
            student_id: student_id.to_string(),
            affiliation: affiliation.to_string(),
        }
    }
}

/// Input for registering a new contestant
#[derive(Debug, Clone, Default)]
pub struct NewContestant {
    pub name: String,
    pub student_id: String,
    pub affiliation: String,
    pub password: Option<String>,
}

impl NewContestant {
    pub fn new(name: &str, student_id: &str, affiliation: &str) -> Self {
        Self {
            name: name.to_string(),
            student_id: student_id.to_string(),
            affiliation: affiliation.to_string(),
            password: None,
        }
    }

    pub fn identity(&self) -> ContestantIdentity {
        ContestantIdentity::new(&self.name, &self.student_id, &self.affiliation)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
