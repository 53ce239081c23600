//! Seat handler implementations

use crate::{
    error::{AppError, AppResult},
    handlers::Context,
    models::{ContestantId, Seat},
    state::Session,
    storage::SeatRepository,
};

use super::{
    request::{AddSeatRequest, ImportSeatsRequest, ListSeatsRequest, SeatRefRequest, WhereRequest},
    response::{
        OccupantResponse, SeatResponse, SeatUpdateResponse, SeatsListResponse,
        TeamLocationResponse,
    },
};

fn seat_view(session: &Session, seat: &Seat, occupant: Option<ContestantId>) -> AppResult<SeatResponse> {
    let occupant = occupant
        .map(|id| session.contestants.get(id).map(OccupantResponse::from))
        .transpose()?;
    Ok(SeatResponse {
        seat: seat.clone(),
        occupant,
    })
}

/// Add one seat
pub fn add_seat(ctx: &Context, payload: AddSeatRequest) -> AppResult<SeatUpdateResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let seat = session.seats.create(payload.room.trim(), payload.seat_id.trim())?;
    session.save_seats()?;
    tracing::info!(%seat, "seat added");

    Ok(SeatUpdateResponse {
        action: "added",
        seats: vec![seat],
        total: session.seats.total(),
    })
}

/// Add every seat of a TSV file, or none of them
pub fn import_seats(ctx: &Context, payload: ImportSeatsRequest) -> AppResult<SeatUpdateResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    if !payload.file.is_file() {
        return Err(AppError::NotFound(format!("Import file {}", payload.file.display())));
    }
    let mut pool = session.seats.clone();
    let mut added = Vec::new();
    for (line, room, seat_id) in SeatRepository::read(&payload.file)? {
        let seat = pool.create(room.trim(), seat_id.trim()).map_err(|err| match err {
            AppError::InvalidFormat(reason) => {
                AppError::InvalidFormat(format!("{}:{line}: {reason}", payload.file.display()))
            }
            other => other,
        })?;
        added.push(seat);
    }

    session.seats = pool;
    session.save_seats()?;
    tracing::info!(count = added.len(), "seats imported");

    Ok(SeatUpdateResponse {
        action: "imported",
        seats: added,
        total: session.seats.total(),
    })
}

/// Remove a free seat
pub fn remove_seat(ctx: &Context, payload: SeatRefRequest) -> AppResult<SeatUpdateResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let seat = Seat::decode(&payload.seat)?;
    session.seats.remove(&seat)?;
    session.save_seats()?;
    tracing::info!(%seat, "seat removed");

    Ok(SeatUpdateResponse {
        action: "removed",
        seats: vec![seat],
        total: session.seats.total(),
    })
}

/// Show who sits on a seat
pub fn show_seat(ctx: &Context, payload: SeatRefRequest) -> AppResult<SeatResponse> {
    let session = ctx.session()?;
    let seat = Seat::decode(&payload.seat)?;
    let occupant = session.seats.occupant(&seat)?;
    seat_view(&session, &seat, occupant)
}

/// Show where a team sits
pub fn locate_team(ctx: &Context, payload: WhereRequest) -> AppResult<TeamLocationResponse> {
    let session = ctx.session()?;
    let contestant = session.contestants.find_by_team(payload.team_id)?;
    Ok(TeamLocationResponse {
        team_id: payload.team_id,
        contestant: contestant.into(),
        seat: contestant.seat.clone(),
    })
}

/// List seats of one room or of every room
pub fn list_seats(ctx: &Context, payload: ListSeatsRequest) -> AppResult<SeatsListResponse> {
    let session = ctx.session()?;
    let (entries, rooms) = match &payload.room {
        Some(room) => {
            let entries = session.seats.room_seats(room)?;
            let rooms = session
                .seats
                .room_occupancy()
                .into_iter()
                .filter(|r| &r.room == room)
                .collect();
            (entries, rooms)
        }
        None => (session.seats.iter().collect(), session.seats.room_occupancy()),
    };

    let seats = entries
        .into_iter()
        .map(|(seat, occupant)| seat_view(&session, seat, occupant))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(SeatsListResponse { seats, rooms })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::handlers::{
        contest::{CreateContestRequest, create_contest, lock_contest},
        test_support::context,
    };

    fn setup(tmp: &tempfile::TempDir) -> Context {
        let ctx = context(tmp);
        create_contest(CreateContestRequest {
            directory: ctx.dir.root().to_path_buf(),
            title: "Regional".to_string(),
            team_category_ids: "3".to_string(),
            team_id_range: "1-9".to_string(),
            account_prefix: String::new(),
        })
        .unwrap();
        ctx
    }

    fn add(ctx: &Context, room: &str, seat_id: &str) -> AppResult<SeatUpdateResponse> {
        add_seat(
            ctx,
            AddSeatRequest {
                room: room.to_string(),
                seat_id: seat_id.to_string(),
            },
        )
    }

    fn seat_ref(text: &str) -> SeatRefRequest {
        SeatRefRequest {
            seat: text.to_string(),
        }
    }

    #[test]
    fn test_add_remove_and_show() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        add(&ctx, "A", "1").unwrap();
        assert!(matches!(add(&ctx, "A", "1"), Err(AppError::AlreadyExists(_))));
        assert_eq!(add(&ctx, "B", "7").unwrap().total, 2);

        assert!(show_seat(&ctx, seat_ref("A-1")).unwrap().occupant.is_none());
        assert!(matches!(show_seat(&ctx, seat_ref("A-9")), Err(AppError::NotFound(_))));
        assert!(matches!(show_seat(&ctx, seat_ref("A1")), Err(AppError::InvalidFormat(_))));

        assert_eq!(remove_seat(&ctx, seat_ref("A-1")).unwrap().total, 1);
        let listed = list_seats(&ctx, ListSeatsRequest { room: None }).unwrap();
        assert_eq!(listed.to_string(), "[B-7] free\nB[0/1]");
        assert!(matches!(
            list_seats(&ctx, ListSeatsRequest { room: Some("A".to_string()) }),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        let file = tmp.path().join("seats.tsv");

        fs::write(&file, "A\t1\nA\t2\nA\t1\n").unwrap();
        assert!(matches!(
            import_seats(&ctx, ImportSeatsRequest { file: file.clone() }),
            Err(AppError::AlreadyExists(_))
        ));
        assert_eq!(ctx.session().unwrap().seats.total(), 0);

        fs::write(&file, "A\t1\nA\t2\nB\t1\n").unwrap();
        let imported = import_seats(&ctx, ImportSeatsRequest { file }).unwrap();
        assert_eq!(imported.seats.len(), 3);
        assert_eq!(ctx.session().unwrap().seats.room_count(), 2);
    }

    #[test]
    fn test_locked_contest_rejects_seat_changes() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        lock_contest(&ctx).unwrap();
        assert!(matches!(add(&ctx, "A", "1"), Err(AppError::ContestLocked)));
        assert!(matches!(
            locate_team(&ctx, WhereRequest { team_id: 1 }),
            Err(AppError::NotFound(_))
        ));
    }
}
