//! Seat pool

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rand::seq::IteratorRandom;

use crate::{
    error::{AppError, AppResult},
    models::{ContestantId, RoomOccupancy, Seat},
    utils::validate_seat_part,
};

/// How a contestant should be given a seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatRequest {
    /// A specific seat
    Manual(Seat),
    /// Any free seat, optionally restricted to some rooms
    Auto {
        random: bool,
        rooms: Option<BTreeSet<String>>,
    },
}

impl SeatRequest {
    /// Lowest free seat in any room
    pub fn lowest() -> Self {
        Self::Auto {
            random: false,
            rooms: None,
        }
    }
}

/// Every seat of the contest with its occupant
///
/// Seats keep the order they were created in. `free` mirrors the seats
/// without an occupant and is updated on every mutation.
#[derive(Debug, Clone, Default)]
pub struct SeatPool {
    seats: IndexMap<Seat, Option<ContestantId>>,
    free: BTreeSet<Seat>,
}

impl SeatPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free seat
    pub fn create(&mut self, room: &str, seat_id: &str) -> AppResult<Seat> {
        validate_seat_part(room)
            .map_err(|reason| AppError::InvalidFormat(format!("room {room:?}: {reason}")))?;
        validate_seat_part(seat_id)
            .map_err(|reason| AppError::InvalidFormat(format!("seat id {seat_id:?}: {reason}")))?;

        let seat = Seat::new(room, seat_id);
        if self.seats.contains_key(&seat) {
            return Err(AppError::AlreadyExists(format!("seat [{seat}]")));
        }
        self.seats.insert(seat.clone(), None);
        self.free.insert(seat.clone());
        Ok(seat)
    }

    /// Delete a free seat
    pub fn remove(&mut self, seat: &Seat) -> AppResult<()> {
        match self.seats.get(seat) {
            None => Err(Self::missing(seat)),
            Some(Some(occupant)) => Err(AppError::SeatStillOccupied {
                seat: seat.clone(),
                occupant: *occupant,
            }),
            Some(None) => {
                self.seats.shift_remove(seat);
                self.free.remove(seat);
                Ok(())
            }
        }
    }

    /// Put `occupant` on a specific seat
    pub fn occupy(&mut self, occupant: ContestantId, seat: &Seat) -> AppResult<()> {
        let slot = self.seats.get_mut(seat).ok_or_else(|| Self::missing(seat))?;
        if let Some(current) = slot {
            return Err(AppError::SeatOccupied {
                seat: seat.clone(),
                occupant: *current,
            });
        }
        *slot = Some(occupant);
        self.free.remove(seat);
        tracing::debug!(%seat, occupant, "seat occupied");
        Ok(())
    }

    /// Free an occupied seat, returning who sat there
    pub fn release(&mut self, seat: &Seat) -> AppResult<ContestantId> {
        let slot = self.seats.get_mut(seat).ok_or_else(|| Self::missing(seat))?;
        let occupant = slot.take().ok_or_else(|| AppError::SeatAlreadyFree(seat.clone()))?;
        self.free.insert(seat.clone());
        tracing::debug!(%seat, occupant, "seat released");
        Ok(occupant)
    }

    /// Pick a free seat for `occupant` and occupy it
    ///
    /// Without `random` the smallest free seat is chosen. An empty room
    /// filter means no restriction.
    pub fn allocate(
        &mut self,
        occupant: ContestantId,
        random: bool,
        rooms: Option<&BTreeSet<String>>,
    ) -> AppResult<Seat> {
        let rooms = rooms.filter(|r| !r.is_empty());
        let mut candidates = self
            .free
            .iter()
            .filter(|seat| rooms.is_none_or(|r| r.contains(&seat.room)));

        let chosen = if random {
            candidates.choose(&mut rand::rng())
        } else {
            candidates.next()
        }
        .cloned()
        .ok_or(AppError::NoAvailableSeat)?;

        self.occupy(occupant, &chosen)?;
        Ok(chosen)
    }

    /// Seat `occupant` as described by `request`
    pub fn assign(&mut self, occupant: ContestantId, request: &SeatRequest) -> AppResult<Seat> {
        match request {
            SeatRequest::Manual(seat) => {
                self.occupy(occupant, seat)?;
                Ok(seat.clone())
            }
            SeatRequest::Auto { random, rooms } => self.allocate(occupant, *random, rooms.as_ref()),
        }
    }

    /// Occupant of a seat, `None` when free
    pub fn occupant(&self, seat: &Seat) -> AppResult<Option<ContestantId>> {
        self.seats.get(seat).copied().ok_or_else(|| Self::missing(seat))
    }

    /// All seats in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&Seat, Option<ContestantId>)> {
        self.seats.iter().map(|(seat, occupant)| (seat, *occupant))
    }

    /// Seats of one room in creation order
    pub fn room_seats(&self, room: &str) -> AppResult<Vec<(&Seat, Option<ContestantId>)>> {
        let seats: Vec<_> = self.iter().filter(|(seat, _)| seat.room == room).collect();
        if seats.is_empty() {
            return Err(AppError::NotFound(format!("Room {room}")));
        }
        Ok(seats)
    }

    /// Occupied/total per room, rooms in order of first appearance
    pub fn room_occupancy(&self) -> Vec<RoomOccupancy> {
        let mut rooms: IndexMap<&str, (usize, usize)> = IndexMap::new();
        for (seat, occupant) in &self.seats {
            let entry = rooms.entry(seat.room.as_str()).or_default();
            entry.1 += 1;
            if occupant.is_some() {
                entry.0 += 1;
            }
        }
        rooms
            .into_iter()
            .map(|(room, (occupied, total))| RoomOccupancy {
                room: room.to_string(),
                occupied,
                total,
            })
            .collect()
    }

    pub fn total(&self) -> usize {
        self.seats.len()
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn room_count(&self) -> usize {
        self.seats
            .keys()
            .map(|seat| seat.room.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn missing(seat: &Seat) -> AppError {
        AppError::NotFound(format!("Seat [{seat}]"))
    }
}
