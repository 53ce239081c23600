//! Team id range model

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, AppResult};
use crate::utils::validation::parse_range;

/// Team id type
pub type TeamId = u32;

/// Closed range `[lo, hi]` of team ids a contest may hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamIdRange {
    lo: TeamId,
    hi: TeamId,
}

impl TeamIdRange {
    pub fn new(lo: TeamId, hi: TeamId) -> AppResult<Self> {
        if lo > hi {
            return Err(AppError::InvalidFormat(format!(
                "team id range {lo}-{hi}: lower bound exceeds upper bound"
            )));
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> TeamId {
        self.lo
    }

    pub fn hi(&self) -> TeamId {
        self.hi
    }

    /// Number of ids in the range
    pub fn size(&self) -> usize {
        (self.hi - self.lo) as usize + 1
    }

    pub fn contains(&self, id: TeamId) -> bool {
        (self.lo..=self.hi).contains(&id)
    }

    pub fn iter(&self) -> RangeInclusive<TeamId> {
        self.lo..=self.hi
    }
}

impl fmt::Display for TeamIdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl FromStr for TeamIdRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = parse_range(s)
            .map_err(|reason| AppError::InvalidFormat(format!("team id range {s:?}: {reason}")))?;
        Self::new(lo, hi)
    }
}

impl Serialize for TeamIdRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TeamIdRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
