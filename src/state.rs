//! Per-invocation session state
//!
//! A `Session` owns one instance of every registry for the lifetime of a
//! single command. It is loaded explicitly from the contest directory and
//! each store is written back explicitly after a successful mutation.

use crate::{
    error::{AppError, AppResult},
    models::{Contest, Readiness},
    services::{AffiliationRegistry, ContestantRegistry, SeatPool, TeamIdPool},
    storage::{
        AffiliationRepository, ContestDir, ContestRepository, ContestantRepository, SeatRepository,
    },
};

/// Loaded contest with its pools and registries
#[derive(Debug)]
pub struct Session {
    pub dir: ContestDir,
    pub contest: Contest,
    pub team_ids: TeamIdPool,
    pub seats: SeatPool,
    pub affiliations: AffiliationRegistry,
    pub contestants: ContestantRegistry,
}

impl Session {
    /// Load every store of `dir`
    ///
    /// Seats and affiliations are loaded before contestants so that replaying
    /// contestants can reserve their seats and check their affiliations.
    pub fn load(dir: ContestDir) -> AppResult<Self> {
        let contest = ContestRepository::load(&dir)?;
        let mut team_ids = TeamIdPool::new(contest.team_id_range);
        let mut seats = SeatRepository::load(&dir)?;
        let affiliations = AffiliationRepository::load(&dir)?;

        let mut contestants = ContestantRegistry::new();
        for record in ContestantRepository::load(&dir)? {
            contestants.restore(&mut team_ids, &mut seats, &affiliations, record)?;
        }
        contestants.raise_max_id(contest.last_contestant_id);

        tracing::debug!(
            root = %dir.root().display(),
            contestants = contestants.len(),
            seats = seats.total(),
            affiliations = affiliations.len(),
            "session loaded"
        );

        Ok(Self {
            dir,
            contest,
            team_ids,
            seats,
            affiliations,
            contestants,
        })
    }

    /// Create a new contest directory with empty stores
    pub fn create(dir: ContestDir, contest: Contest) -> AppResult<Self> {
        dir.create()?;
        let mut session = Self {
            team_ids: TeamIdPool::new(contest.team_id_range),
            dir,
            contest,
            seats: SeatPool::new(),
            affiliations: AffiliationRegistry::new(),
            contestants: ContestantRegistry::new(),
        };
        session.save_contest()?;
        session.save_seats()?;
        session.save_affiliations()?;
        session.save_contestants()?;
        tracing::info!(root = %session.dir.root().display(), "contest created");
        Ok(session)
    }

    /// Fail with `ContestLocked` when mutations are disabled
    pub fn ensure_unlocked(&self) -> AppResult<()> {
        if self.contest.locked() {
            return Err(AppError::ContestLocked);
        }
        Ok(())
    }

    /// Upper bound on live contestants, from the current seat count
    pub fn capacity(&self) -> usize {
        self.contest.capacity(self.seats.total())
    }

    /// Fail with `CapacityExceeded` unless `extra` more contestants fit
    pub fn ensure_room_for(&self, extra: usize) -> AppResult<()> {
        let live = self.contestants.len();
        let capacity = self.capacity();
        if live + extra > capacity {
            return Err(AppError::CapacityExceeded(format!(
                "{live} contestants + {extra} new > capacity {capacity}"
            )));
        }
        Ok(())
    }

    pub fn readiness(&self) -> Readiness {
        let (seated, contestants) = self.contestants.seat_state();
        let (with_password, _) = self.contestants.password_state();
        Readiness {
            contestants,
            seated,
            with_password,
            locked: self.contest.locked(),
        }
    }

    pub fn save_contest(&self) -> AppResult<()> {
        ContestRepository::save(&self.dir, &self.contest)
    }

    pub fn save_seats(&self) -> AppResult<()> {
        SeatRepository::save(&self.dir, &self.seats)
    }

    pub fn save_affiliations(&self) -> AppResult<()> {
        AffiliationRepository::save(&self.dir, &self.affiliations)
    }

    /// Write the contestants, and the contest too when new ids were issued
    pub fn save_contestants(&mut self) -> AppResult<()> {
        ContestantRepository::save(&self.dir, &self.contestants)?;
        let issued = self.contestants.max_id();
        if issued > self.contest.last_contestant_id {
            self.contest.last_contestant_id = issued;
            self.save_contest()?;
        }
        Ok(())
    }
}
