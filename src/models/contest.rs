//! Contest model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ContestantId, TeamId, TeamIdRange};
use crate::constants::CATEGORY_SEPARATOR;

/// Contest settings as kept in `contest.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub title: String,
    #[serde(
        serialize_with = "serialize_categories",
        deserialize_with = "deserialize_categories"
    )]
    pub team_category_ids: Vec<u32>,
    pub team_id_range: TeamIdRange,
    #[serde(default)]
    pub account_prefix: String,
    #[serde(default)]
    pub lock: bool,
    /// Highest contestant id ever issued
    #[serde(default)]
    pub last_contestant_id: ContestantId,
}

impl Contest {
    /// Check whether mutations are disabled
    pub fn locked(&self) -> bool {
        self.lock
    }

    pub fn set_locked(&mut self, lock: bool) {
        self.lock = lock;
    }

    /// Upper bound on live contestants given the current seat count
    pub fn capacity(&self, seat_count: usize) -> usize {
        self.team_id_range.size().min(seat_count)
    }

    /// DOMjudge account name for a team
    pub fn account_name(&self, team_id: TeamId) -> String {
        format!("{}{}", self.account_prefix, team_id)
    }

    /// Category new teams are exported under
    pub fn default_category(&self) -> Option<u32> {
        self.team_category_ids.first().copied()
    }
}

/// Readiness of the roster for the contest day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Readiness {
    pub contestants: usize,
    pub seated: usize,
    pub with_password: usize,
    pub locked: bool,
}

impl Readiness {
    pub fn all_seated(&self) -> bool {
        self.seated == self.contestants
    }

    pub fn all_have_password(&self) -> bool {
        self.with_password == self.contestants
    }

    pub fn is_ready(&self) -> bool {
        self.all_seated() && self.all_have_password() && self.locked
    }

    /// Names of the checks that are not satisfied yet
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if !self.all_seated() {
            issues.push("seat");
        }
        if !self.all_have_password() {
            issues.push("password");
        }
        if !self.locked {
            issues.push("lock");
        }
        issues
    }
}

fn serialize_categories<S: Serializer>(ids: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(&CATEGORY_SEPARATOR.to_string());
    serializer.serialize_str(&joined)
}

fn deserialize_categories<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
    // A single category is written by YAML as a bare integer.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Single(u32),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Single(id) => Ok(vec![id]),
        Raw::Text(text) => crate::utils::validation::parse_category_ids(&text)
            .map_err(serde::de::Error::custom),
    }
}
