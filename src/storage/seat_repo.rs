//! Seat repository

use std::path::Path;

use super::{ContestDir, tsv};
use crate::{
    error::{AppError, AppResult},
    services::SeatPool,
};

/// Repository for `data/seats.tsv` and seat import files
pub struct SeatRepository;

impl SeatRepository {
    /// Build a pool with every stored seat free
    ///
    /// Occupancy is replayed afterwards from the contestant store.
    pub fn load(dir: &ContestDir) -> AppResult<SeatPool> {
        let path = dir.seats_file();
        let mut pool = SeatPool::new();
        for (line, room, seat_id) in Self::read(&path)? {
            pool.create(&room, &seat_id).map_err(|err| {
                AppError::InvalidFormat(format!("{}:{line}: {err}", path.display()))
            })?;
        }
        Ok(pool)
    }

    pub fn save(dir: &ContestDir, pool: &SeatPool) -> AppResult<()> {
        tsv::write(
            &dir.seats_file(),
            pool.iter()
                .map(|(seat, _)| [seat.room.as_str(), seat.seat_id.as_str()]),
        )
    }

    /// Read `(line, room, seat_id)` rows from a TSV file
    pub fn read(path: &Path) -> AppResult<Vec<(usize, String, String)>> {
        Ok(tsv::read(path, 2)?
            .into_iter()
            .map(|row| {
                let mut fields = row.fields.into_iter();
                let room = fields.next().unwrap_or_default();
                let seat_id = fields.next().unwrap_or_default();
                (row.line, room, seat_id)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::models::Seat;

    #[test]
    fn test_save_and_load_keeps_order() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ContestDir::new(tmp.path().join("contest"));
        dir.create().unwrap();

        let mut pool = SeatPool::new();
        pool.create("B", "1").unwrap();
        pool.create("A", "2").unwrap();
        pool.occupy(1, &Seat::new("A", "2")).unwrap();
        SeatRepository::save(&dir, &pool).unwrap();

        assert_eq!(fs::read_to_string(dir.seats_file()).unwrap(), "B\t1\nA\t2\n");
        let loaded = SeatRepository::load(&dir).unwrap();
        let seats: Vec<String> = loaded.iter().map(|(seat, _)| seat.to_string()).collect();
        assert_eq!(seats, vec!["B-1", "A-2"]);
        assert_eq!(loaded.available(), 2);
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ContestDir::new(tmp.path().join("contest"));
        dir.create().unwrap();
        fs::write(dir.seats_file(), "A\t1\nA\t1\n").unwrap();

        let err = SeatRepository::load(&dir).unwrap_err();
        assert!(matches!(&err, AppError::InvalidFormat(msg) if msg.contains(":2:")));
    }
}
