//! Contestant registry
//!
//! Owns every live contestant and keeps the team id pool and seat pool in
//! step with them. Each operation validates first and mutates last; where a
//! later step can still fail after an earlier one took a resource, that
//! resource is handed back before the error is returned.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{
    error::{AppError, AppResult},
    models::{Contestant, ContestantId, ContestantIdentity, NewContestant, Seat, TeamId},
    utils::PasswordPolicy,
};

use super::{
    affiliations::{AffiliationReferences, AffiliationRegistry},
    seats::{SeatPool, SeatRequest},
    team_ids::TeamIdPool,
};

/// Result of an operation applied to many contestants
///
/// Batches stop at the first failure; contestants processed before it stay
/// committed.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub processed: Vec<ContestantId>,
    pub failure: Option<AppError>,
}

impl BatchOutcome {
    pub fn count(&self) -> usize {
        self.processed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Turn a partial batch into the error that stopped it
    pub fn into_result(self) -> AppResult<usize> {
        match self.failure {
            None => Ok(self.processed.len()),
            Some(err) => Err(err),
        }
    }
}

/// Live contestants indexed by id, identity and team id
#[derive(Debug, Clone, Default)]
pub struct ContestantRegistry {
    contestants: BTreeMap<ContestantId, Contestant>,
    identities: HashSet<ContestantIdentity>,
    by_team: HashMap<TeamId, ContestantId>,
    /// Highest id ever handed out; ids are never reused
    max_id: ContestantId,
}

impl ContestantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new contestant
    ///
    /// The seat (if requested) is taken before the team id so that a seating
    /// failure consumes nothing; a team id failure after seating gives the
    /// seat back.
    pub fn create(
        &mut self,
        team_ids: &mut TeamIdPool,
        seats: &mut SeatPool,
        affiliations: &AffiliationRegistry,
        new: NewContestant,
        seat: Option<&SeatRequest>,
    ) -> AppResult<Contestant> {
        if !affiliations.contains(&new.affiliation) {
            return Err(AppError::UnknownAffiliation(new.affiliation));
        }
        let identity = new.identity();
        if self.identities.contains(&identity) {
            return Err(AppError::DuplicateContestant {
                name: identity.name,
                student_id: identity.student_id,
                affiliation: identity.affiliation,
            });
        }

        let id = self
            .max_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("contestant id overflow".to_string()))?;

        let seat = seat.map(|request| seats.assign(id, request)).transpose()?;

        let team_id = match team_ids.allocate() {
            Ok(team_id) => team_id,
            Err(err) => {
                if let Some(taken) = &seat {
                    seats.release(taken)?;
                }
                return Err(err);
            }
        };

        self.max_id = id;
        let contestant = Contestant {
            id,
            team_id,
            name: new.name,
            student_id: new.student_id,
            affiliation: new.affiliation,
            seat,
            password: new.password,
        };
        self.index(contestant.clone());

        let similar = self.similar_to(&contestant);
        if !similar.is_empty() {
            tracing::warn!(
                contestant = id,
                ?similar,
                "contestant shares affiliation and name or student id with existing contestants"
            );
        }

        tracing::info!(contestant = id, team_id, "contestant created");
        Ok(contestant)
    }

    /// Register every row in order, stopping at the first failure
    pub fn create_all(
        &mut self,
        team_ids: &mut TeamIdPool,
        seats: &mut SeatPool,
        affiliations: &AffiliationRegistry,
        rows: Vec<NewContestant>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for row in rows {
            match self.create(team_ids, seats, affiliations, row, None) {
                Ok(contestant) => outcome.processed.push(contestant.id),
                Err(err) => {
                    outcome.failure = Some(err);
                    break;
                }
            }
        }
        outcome
    }

    /// Replay a stored contestant, reserving its team id and seat
    pub fn restore(
        &mut self,
        team_ids: &mut TeamIdPool,
        seats: &mut SeatPool,
        affiliations: &AffiliationRegistry,
        record: Contestant,
    ) -> AppResult<()> {
        let id = record.id;
        let corrupt = |reason: String| AppError::InvalidFormat(format!("contestant {id} in store: {reason}"));

        if self.contestants.contains_key(&id) {
            return Err(corrupt("duplicate contestant id".to_string()));
        }
        if !affiliations.contains(&record.affiliation) {
            return Err(corrupt(format!("unknown affiliation {}", record.affiliation)));
        }
        if self.identities.contains(&record.identity()) {
            return Err(corrupt("duplicate name, sid and affiliation".to_string()));
        }
        if !team_ids.is_free(record.team_id) {
            return Err(corrupt(format!(
                "team id {} is not available (duplicate or out of range)",
                record.team_id
            )));
        }
        if let Some(seat) = &record.seat {
            seats.occupy(id, seat).map_err(|err| corrupt(err.to_string()))?;
        }
        if !team_ids.occupy(record.team_id) {
            if let Some(seat) = &record.seat {
                seats.release(seat)?;
            }
            return Err(AppError::Internal(format!(
                "team id {} was free but could not be reserved",
                record.team_id
            )));
        }

        self.max_id = self.max_id.max(id);
        self.index(record);
        Ok(())
    }

    /// Delete a contestant, releasing its seat and team id
    pub fn remove(
        &mut self,
        team_ids: &mut TeamIdPool,
        seats: &mut SeatPool,
        id: ContestantId,
    ) -> AppResult<Contestant> {
        let contestant = self.get(id)?;
        let team_id = contestant.team_id;
        let seat = contestant.seat.clone();

        if let Some(seat) = &seat {
            seats.release(seat)?;
        }
        if let Err(err) = team_ids.release(team_id) {
            if let Some(seat) = &seat {
                seats.occupy(id, seat)?;
            }
            return Err(err);
        }

        let contestant = self
            .contestants
            .remove(&id)
            .ok_or_else(|| AppError::Internal(format!("contestant {id} vanished")))?;
        self.identities.remove(&contestant.identity());
        self.by_team.remove(&contestant.team_id);

        tracing::info!(contestant = id, team_id, "contestant removed");
        Ok(contestant)
    }

    /// Give a contestant a seat
    ///
    /// With `override_seat` an existing seat is released first; if the new
    /// seat cannot be taken the old one is restored.
    pub fn seat(
        &mut self,
        seats: &mut SeatPool,
        id: ContestantId,
        request: &SeatRequest,
        override_seat: bool,
    ) -> AppResult<Seat> {
        let previous = self.get(id)?.seat.clone();
        if let Some(seat) = &previous {
            if !override_seat {
                return Err(AppError::AlreadySeated {
                    id,
                    seat: seat.clone(),
                });
            }
            seats.release(seat)?;
        }

        let seat = match seats.assign(id, request) {
            Ok(seat) => seat,
            Err(err) => {
                if let Some(seat) = &previous {
                    seats.occupy(id, seat)?;
                }
                return Err(err);
            }
        };

        self.get_mut(id)?.seat = Some(seat.clone());
        tracing::info!(contestant = id, %seat, "contestant seated");
        Ok(seat)
    }

    /// Take a contestant's seat away
    pub fn unseat(&mut self, seats: &mut SeatPool, id: ContestantId) -> AppResult<Seat> {
        let seat = self.get(id)?.seat.clone().ok_or(AppError::NotSeated(id))?;
        seats.release(&seat)?;
        self.get_mut(id)?.seat = None;
        tracing::info!(contestant = id, %seat, "contestant unseated");
        Ok(seat)
    }

    /// Seat every unseated contestant
    pub fn seat_all(
        &mut self,
        seats: &mut SeatPool,
        random: bool,
        rooms: Option<BTreeSet<String>>,
    ) -> BatchOutcome {
        let request = SeatRequest::Auto { random, rooms };
        let targets: Vec<ContestantId> = self
            .contestants
            .values()
            .filter(|c| !c.is_seated())
            .map(|c| c.id)
            .collect();

        self.for_each(targets, |registry, id| {
            registry.seat(seats, id, &request, false).map(|_| ())
        })
    }

    /// Unseat every seated contestant
    pub fn unseat_all(&mut self, seats: &mut SeatPool) -> BatchOutcome {
        let targets: Vec<ContestantId> = self
            .contestants
            .values()
            .filter(|c| c.is_seated())
            .map(|c| c.id)
            .collect();

        self.for_each(targets, |registry, id| registry.unseat(seats, id).map(|_| ()))
    }

    /// Generate a password for one contestant
    pub fn generate_password(
        &mut self,
        id: ContestantId,
        policy: &PasswordPolicy,
        override_password: bool,
    ) -> AppResult<String> {
        let contestant = self.get_mut(id)?;
        if contestant.has_password() && !override_password {
            return Err(AppError::PasswordExists(id));
        }
        let password = policy.generate();
        contestant.password = Some(password.clone());
        tracing::info!(contestant = id, "password generated");
        Ok(password)
    }

    /// Generate passwords for everyone without one, or everyone with override
    pub fn generate_password_for_all(
        &mut self,
        policy: &PasswordPolicy,
        override_password: bool,
    ) -> BatchOutcome {
        let targets: Vec<ContestantId> = self
            .contestants
            .values()
            .filter(|c| override_password || !c.has_password())
            .map(|c| c.id)
            .collect();

        self.for_each(targets, |registry, id| {
            registry
                .generate_password(id, policy, override_password)
                .map(|_| ())
        })
    }

    pub fn get(&self, id: ContestantId) -> AppResult<&Contestant> {
        self.contestants
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Contestant {id}")))
    }

    pub fn find_by_team(&self, team_id: TeamId) -> AppResult<&Contestant> {
        self.by_team
            .get(&team_id)
            .and_then(|id| self.contestants.get(id))
            .ok_or_else(|| AppError::NotFound(format!("Team {team_id}")))
    }

    /// Live contestants in id order
    pub fn iter(&self) -> impl Iterator<Item = &Contestant> {
        self.contestants.values()
    }

    /// Contestants resembling `contestant`, excluding itself
    pub fn similar_to(&self, contestant: &Contestant) -> Vec<ContestantId> {
        self.contestants
            .values()
            .filter(|other| other.id != contestant.id && other.resembles(contestant))
            .map(|other| other.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    pub fn max_id(&self) -> ContestantId {
        self.max_id
    }

    /// Never hand out an id at or below `id`
    ///
    /// Ids of contestants removed in earlier sessions are no longer in the
    /// store, so the persisted mark is fed back after replay.
    pub fn raise_max_id(&mut self, id: ContestantId) {
        self.max_id = self.max_id.max(id);
    }

    /// Seated and total contestant counts
    pub fn seat_state(&self) -> (usize, usize) {
        let seated = self.contestants.values().filter(|c| c.is_seated()).count();
        (seated, self.len())
    }

    /// Contestants with a password and total contestant counts
    pub fn password_state(&self) -> (usize, usize) {
        let with_password = self.contestants.values().filter(|c| c.has_password()).count();
        (with_password, self.len())
    }

    fn get_mut(&mut self, id: ContestantId) -> AppResult<&mut Contestant> {
        self.contestants
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Contestant {id}")))
    }

    fn index(&mut self, contestant: Contestant) {
        self.identities.insert(contestant.identity());
        self.by_team.insert(contestant.team_id, contestant.id);
        self.contestants.insert(contestant.id, contestant);
    }

    fn for_each<F>(&mut self, targets: Vec<ContestantId>, mut op: F) -> BatchOutcome
    where
        F: FnMut(&mut Self, ContestantId) -> AppResult<()>,
    {
        let mut outcome = BatchOutcome::default();
        for id in targets {
            if let Err(err) = op(self, id) {
                outcome.failure = Some(err);
                break;
            }
            outcome.processed.push(id);
        }
        outcome
    }
}

impl AffiliationReferences for ContestantRegistry {
    fn member_of(&self, key: &str) -> Option<ContestantId> {
        self.contestants
            .values()
            .find(|c| c.affiliation == key)
            .map(|c| c.id)
    }

    fn member_count(&self, key: &str) -> usize {
        self.contestants
            .values()
            .filter(|c| c.affiliation == key)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        team_ids: TeamIdPool,
        seats: SeatPool,
        affiliations: AffiliationRegistry,
        registry: ContestantRegistry,
    }

    impl Fixture {
        fn new(range: &str, seats: &[(&str, &str)]) -> Self {
            let mut pool = SeatPool::new();
            for (room, seat_id) in seats {
                pool.create(room, seat_id).unwrap();
            }
            let mut affiliations = AffiliationRegistry::new();
            affiliations.create("MIT", "Massachusetts Institute of Technology").unwrap();
            affiliations.create("CMU", "Carnegie Mellon University").unwrap();
            Self {
                team_ids: TeamIdPool::new(range.parse().unwrap()),
                seats: pool,
                affiliations,
                registry: ContestantRegistry::new(),
            }
        }

        fn create(&mut self, name: &str, sid: &str, seat: Option<&SeatRequest>) -> AppResult<Contestant> {
            self.registry.create(
                &mut self.team_ids,
                &mut self.seats,
                &self.affiliations,
                NewContestant::new(name, sid, "MIT"),
                seat,
            )
        }

        fn remove(&mut self, id: ContestantId) -> AppResult<Contestant> {
            self.registry.remove(&mut self.team_ids, &mut self.seats, id)
        }

        fn seat(&mut self, id: ContestantId, request: &SeatRequest, override_seat: bool) -> AppResult<Seat> {
            self.registry.seat(&mut self.seats, id, request, override_seat)
        }
    }

    fn policy() -> PasswordPolicy {
        PasswordPolicy::new("abc123", 10).unwrap()
    }

    #[test]
    fn test_create_assigns_ids_in_order() {
        let mut fx = Fixture::new("5-9", &[]);
        let a = fx.create("Alice", "001", None).unwrap();
        let b = fx.create("Bob", "002", None).unwrap();
        assert_eq!((a.id, a.team_id), (1, 5));
        assert_eq!((b.id, b.team_id), (2, 6));
        assert_eq!(fx.registry.find_by_team(6).unwrap().name, "Bob");
    }

    #[test]
    fn test_create_unknown_affiliation() {
        let mut fx = Fixture::new("1-3", &[("A", "1")]);
        let err = fx
            .registry
            .create(
                &mut fx.team_ids,
                &mut fx.seats,
                &fx.affiliations,
                NewContestant::new("Alice", "001", "ETH"),
                Some(&SeatRequest::lowest()),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownAffiliation(_)));
        assert_eq!(fx.team_ids.available(), 3);
        assert_eq!(fx.seats.available(), 1);
    }

    #[test]
    fn test_duplicate_contestant_consumes_nothing() {
        let mut fx = Fixture::new("1-3", &[("A", "1"), ("A", "2")]);
        fx.create("Alice", "001", Some(&SeatRequest::lowest())).unwrap();

        let err = fx.create("Alice", "001", Some(&SeatRequest::lowest())).unwrap_err();
        assert!(matches!(err, AppError::DuplicateContestant { .. }));
        assert_eq!(fx.team_ids.available(), 2);
        assert_eq!(fx.seats.available(), 1);
        assert_eq!(fx.registry.max_id(), 1);

        // Same name with another sid is only a warning.
        assert!(fx.create("Alice", "002", None).is_ok());
    }

    #[test]
    fn test_seat_is_released_when_team_ids_run_out() {
        let mut fx = Fixture::new("1-1", &[("A", "1"), ("A", "2")]);
        fx.create("Alice", "001", None).unwrap();
        assert!(fx.team_ids.is_exhausted());

        let err = fx.create("Bob", "002", Some(&SeatRequest::lowest())).unwrap_err();
        assert!(matches!(err, AppError::TeamIdExhausted));
        assert_eq!(fx.seats.available(), 2);
        assert_eq!(fx.seats.occupant(&Seat::new("A", "1")).unwrap(), None);
        assert_eq!(fx.registry.len(), 1);
    }

    #[test]
    fn test_manual_seat_failure_consumes_no_team_id() {
        let mut fx = Fixture::new("1-3", &[("A", "1")]);
        let request = SeatRequest::Manual(Seat::new("A", "1"));
        fx.create("Alice", "001", Some(&request)).unwrap();

        let err = fx.create("Bob", "002", Some(&request)).unwrap_err();
        assert!(matches!(err, AppError::SeatOccupied { occupant: 1, .. }));
        assert_eq!(fx.team_ids.free_ids().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut fx = Fixture::new("1-3", &[("A", "1")]);
        let first = fx.create("Alice", "001", Some(&SeatRequest::lowest())).unwrap();
        fx.create("Bob", "002", None).unwrap();
        fx.remove(first.id).unwrap();

        assert!(fx.team_ids.is_free(first.team_id));
        assert_eq!(fx.seats.available(), 1);

        let third = fx.create("Carol", "003", Some(&SeatRequest::lowest())).unwrap();
        assert_ne!(third.id, first.id);
        assert_eq!(third.id, 3);
        assert_eq!(third.team_id, first.team_id);
        assert_eq!(third.seat, first.seat);
    }

    #[test]
    fn test_remove_missing() {
        let mut fx = Fixture::new("1-3", &[]);
        assert!(matches!(fx.remove(4), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_removed_identity_can_register_again() {
        let mut fx = Fixture::new("1-3", &[]);
        let alice = fx.create("Alice", "001", None).unwrap();
        fx.remove(alice.id).unwrap();
        let again = fx.create("Alice", "001", None).unwrap();
        assert_eq!(again.id, 2);
        assert!(matches!(fx.registry.find_by_team(alice.team_id), Ok(c) if c.id == 2));
    }

    #[test]
    fn test_seat_and_override() {
        let mut fx = Fixture::new("1-3", &[("A", "1"), ("A", "2")]);
        let alice = fx.create("Alice", "001", None).unwrap();

        assert_eq!(fx.seat(alice.id, &SeatRequest::lowest(), false).unwrap(), Seat::new("A", "1"));
        let err = fx.seat(alice.id, &SeatRequest::lowest(), false).unwrap_err();
        assert!(matches!(err, AppError::AlreadySeated { .. }));

        let moved = fx
            .seat(alice.id, &SeatRequest::Manual(Seat::new("A", "2")), true)
            .unwrap();
        assert_eq!(moved, Seat::new("A", "2"));
        assert_eq!(fx.seats.occupant(&Seat::new("A", "1")).unwrap(), None);
        assert_eq!(fx.registry.get(alice.id).unwrap().seat, Some(Seat::new("A", "2")));
    }

    #[test]
    fn test_failed_override_keeps_previous_seat() {
        let mut fx = Fixture::new("1-3", &[("A", "1"), ("B", "1")]);
        let alice = fx.create("Alice", "001", Some(&SeatRequest::lowest())).unwrap();
        fx.create("Bob", "002", Some(&SeatRequest::lowest())).unwrap();

        let err = fx
            .seat(alice.id, &SeatRequest::Manual(Seat::new("B", "1")), true)
            .unwrap_err();
        assert!(matches!(err, AppError::SeatOccupied { occupant: 2, .. }));
        assert_eq!(fx.seats.occupant(&Seat::new("A", "1")).unwrap(), Some(alice.id));
        assert_eq!(fx.registry.get(alice.id).unwrap().seat, Some(Seat::new("A", "1")));
    }

    #[test]
    fn test_unseat() {
        let mut fx = Fixture::new("1-3", &[("A", "1")]);
        let alice = fx.create("Alice", "001", Some(&SeatRequest::lowest())).unwrap();
        assert_eq!(fx.registry.unseat(&mut fx.seats, alice.id).unwrap(), Seat::new("A", "1"));
        assert!(matches!(
            fx.registry.unseat(&mut fx.seats, alice.id),
            Err(AppError::NotSeated(1))
        ));
        assert_eq!(fx.seats.available(), 1);
    }

    #[test]
    fn test_password_override() {
        let mut fx = Fixture::new("1-3", &[]);
        let alice = fx.create("Alice", "001", None).unwrap();
        let policy = policy();

        let first = fx.registry.generate_password(alice.id, &policy, false).unwrap();
        assert_eq!(first.chars().count(), 10);
        assert!(first.chars().all(|c| "abc123".contains(c)));

        let err = fx.registry.generate_password(alice.id, &policy, false).unwrap_err();
        assert!(matches!(err, AppError::PasswordExists(1)));
        assert_eq!(err.kind(), crate::error::ErrorKind::PreconditionFailed);

        let second = fx.registry.generate_password(alice.id, &policy, true).unwrap();
        assert_eq!(fx.registry.get(alice.id).unwrap().password.as_deref(), Some(second.as_str()));
    }

    #[test]
    fn test_batch_operations() {
        let mut fx = Fixture::new("1-5", &[("A", "1"), ("A", "2")]);
        for (name, sid) in [("Alice", "1"), ("Bob", "2"), ("Carol", "3")] {
            fx.create(name, sid, None).unwrap();
        }
        fx.registry.generate_password(2, &policy(), false).unwrap();

        let outcome = fx.registry.generate_password_for_all(&policy(), false);
        assert_eq!(outcome.processed, vec![1, 3]);
        assert_eq!(fx.registry.password_state(), (3, 3));

        // Two seats for three contestants: the first two stay seated.
        let outcome = fx.registry.seat_all(&mut fx.seats, false, None);
        assert_eq!(outcome.count(), 2);
        assert!(matches!(outcome.failure, Some(AppError::NoAvailableSeat)));
        assert_eq!(fx.registry.seat_state(), (2, 3));

        let outcome = fx.registry.unseat_all(&mut fx.seats);
        assert!(outcome.is_complete());
        assert_eq!(outcome.into_result().unwrap(), 2);
        assert_eq!(fx.seats.available(), 2);
    }

    #[test]
    fn test_create_all_stops_at_first_failure() {
        let mut fx = Fixture::new("1-5", &[]);
        let rows = vec![
            NewContestant::new("Alice", "1", "MIT"),
            NewContestant::new("Bob", "2", "ETH"),
            NewContestant::new("Carol", "3", "MIT"),
        ];
        let outcome = fx
            .registry
            .create_all(&mut fx.team_ids, &mut fx.seats, &fx.affiliations, rows);
        assert_eq!(outcome.processed, vec![1]);
        assert!(matches!(outcome.failure, Some(AppError::UnknownAffiliation(_))));
        assert_eq!(fx.team_ids.available(), 4);
    }

    #[test]
    fn test_restore_replays_records() {
        let mut fx = Fixture::new("1-5", &[("A", "1"), ("A", "2")]);
        let record = Contestant {
            id: 7,
            team_id: 3,
            name: "Alice".to_string(),
            student_id: String::new(),
            affiliation: "CMU".to_string(),
            seat: Some(Seat::new("A", "2")),
            password: Some("secret".to_string()),
        };
        fx.registry
            .restore(&mut fx.team_ids, &mut fx.seats, &fx.affiliations, record.clone())
            .unwrap();
        assert_eq!(fx.registry.max_id(), 7);
        assert!(!fx.team_ids.is_free(3));
        assert_eq!(fx.seats.occupant(&Seat::new("A", "2")).unwrap(), Some(7));

        let clash = Contestant {
            id: 8,
            name: "Bob".to_string(),
            seat: Some(Seat::new("A", "1")),
            ..record
        };
        let err = fx
            .registry
            .restore(&mut fx.team_ids, &mut fx.seats, &fx.affiliations, clash)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidFormat(_)));
        assert_eq!(fx.seats.occupant(&Seat::new("A", "1")).unwrap(), None);

        let next = fx.create("Carol", "9", None).unwrap();
        assert_eq!((next.id, next.team_id), (8, 1));
    }

    #[test]
    fn test_seats_run_out_before_team_ids() {
        let mut fx = Fixture::new("1-3", &[("A", "1"), ("A", "2")]);
        fx.create("Alice", "1", Some(&SeatRequest::lowest())).unwrap();
        fx.create("Bob", "2", Some(&SeatRequest::lowest())).unwrap();
        assert_eq!(fx.registry.seat_state(), (2, 2));
        assert_eq!(fx.seats.available(), 0);

        let err = fx.create("Carol", "3", Some(&SeatRequest::lowest())).unwrap_err();
        assert!(matches!(err, AppError::NoAvailableSeat));
        assert_eq!(fx.team_ids.free_ids().collect::<Vec<_>>(), vec![3]);
        assert_eq!(fx.registry.max_id(), 2);
    }

    #[test]
    fn test_affiliation_references() {
        let mut fx = Fixture::new("1-3", &[]);
        assert_eq!(fx.registry.member_of("MIT"), None);
        let alice = fx.create("Alice", "1", None).unwrap();
        assert_eq!(fx.registry.member_of("MIT"), Some(alice.id));
        assert_eq!(fx.registry.member_count("MIT"), 1);

        let err = fx.affiliations.remove("MIT", &fx.registry).unwrap_err();
        assert!(matches!(err, AppError::AffiliationInUse { .. }));
        fx.remove(alice.id).unwrap();
        assert!(fx.affiliations.remove("MIT", &fx.registry).is_ok());
    }
}
