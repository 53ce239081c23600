//! Team id pool

use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{TeamId, TeamIdRange},
};

/// Team ids of the contest range and which of them are held
///
/// Only held ids are stored, so the cost follows the number of contestants
/// rather than the width of the range. Allocation always hands out the
/// lowest free id.
#[derive(Debug, Clone)]
pub struct TeamIdPool {
    range: TeamIdRange,
    taken: BTreeSet<TeamId>,
}

impl TeamIdPool {
    /// Create a pool with every id of `range` free
    pub fn new(range: TeamIdRange) -> Self {
        Self {
            range,
            taken: BTreeSet::new(),
        }
    }

    /// Take the lowest free id
    pub fn allocate(&mut self) -> AppResult<TeamId> {
        let id = self.lowest_free().ok_or(AppError::TeamIdExhausted)?;
        self.taken.insert(id);
        tracing::debug!(team_id = id, "allocated team id");
        Ok(id)
    }

    /// Reserve a specific id
    ///
    /// Returns `false` when the id is taken or outside the range; the caller
    /// decides whether that is fatal.
    pub fn occupy(&mut self, id: TeamId) -> bool {
        self.range.contains(id) && self.taken.insert(id)
    }

    /// Return a held id to the pool
    pub fn release(&mut self, id: TeamId) -> AppResult<()> {
        if !self.range.contains(id) {
            return Err(AppError::TeamIdOutOfRange(id));
        }
        if !self.taken.remove(&id) {
            return Err(AppError::TeamIdAlreadyFree(id));
        }
        tracing::debug!(team_id = id, "released team id");
        Ok(())
    }

    pub fn is_free(&self, id: TeamId) -> bool {
        self.range.contains(id) && !self.taken.contains(&id)
    }

    pub fn available(&self) -> usize {
        self.range.size() - self.taken.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.available() == 0
    }

    /// Free ids in ascending order
    pub fn free_ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.range.iter().filter(|id| !self.taken.contains(id))
    }

    // First gap in the held ids, walking up from the bottom of the range.
    fn lowest_free(&self) -> Option<TeamId> {
        let mut candidate = self.range.lo();
        for &held in &self.taken {
            if held != candidate {
                break;
            }
            candidate = candidate.checked_add(1)?;
        }
        self.range.contains(candidate).then_some(candidate)
    }
}
