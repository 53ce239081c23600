//! Seat model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::SEAT_SEPARATOR;
use crate::error::{AppError, AppResult};
use crate::utils::validation::validate_seat_text;

/// A `(room, seat id)` coordinate
///
/// Ordering is lexicographic on room, then seat id. Deterministic seat
/// allocation hands out the smallest free seat under this ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub room: String,
    pub seat_id: String,
}

impl Seat {
    pub fn new(room: impl Into<String>, seat_id: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            seat_id: seat_id.into(),
        }
    }

    /// Decode the `room-seatId` textual form
    pub fn decode(text: &str) -> AppResult<Self> {
        validate_seat_text(text)
            .map_err(|reason| AppError::InvalidFormat(format!("Seat {text:?}: {reason}")))?;

        match text.split_once(SEAT_SEPARATOR) {
            Some((room, seat_id)) => Ok(Self::new(room, seat_id)),
            None => Err(AppError::InvalidFormat(format!("Seat {text:?}"))),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.room, SEAT_SEPARATOR, self.seat_id)
    }
}

impl FromStr for Seat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Seat::decode(&text).map_err(serde::de::Error::custom)
    }
}

/// Occupancy of a single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomOccupancy {
    pub room: String,
    pub occupied: usize,
    pub total: usize,
}

impl fmt::Display for RoomOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}/{}]", self.room, self.occupied, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_seat() {
        let seat = Seat::decode("A-12").unwrap();
        assert_eq!(seat.room, "A");
        assert_eq!(seat.seat_id, "12");
        assert_eq!(seat.to_string(), "A-12");
    }

    #[test]
    fn test_decode_rejects_ambiguous_text() {
        assert!(Seat::decode("A-1-2").is_err());
        assert!(Seat::decode("A12").is_err());
        assert!(Seat::decode(" A-1").is_err());
        assert!(Seat::decode("A-1\n").is_err());
    }

    #[test]
    fn test_seat_ordering() {
        let mut seats = vec![Seat::new("B", "1"), Seat::new("A", "2"), Seat::new("A", "10")];
        seats.sort();
        assert_eq!(
            seats,
            vec![Seat::new("A", "10"), Seat::new("A", "2"), Seat::new("B", "1")]
        );
    }

    #[test]
    fn test_seat_serde_as_string() {
        let json = serde_json::to_string(&Seat::new("R1", "7")).unwrap();
        assert_eq!(json, "\"R1-7\"");
        let back: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Seat::new("R1", "7"));
        assert!(serde_json::from_str::<Seat>("\"bad\"").is_err());
    }
}
