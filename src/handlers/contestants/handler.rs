//! Contestant handler implementations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::Context,
    models::{Contestant, NewContestant},
    services::BatchOutcome,
    storage::ContestantRepository,
    utils::sanitize_string,
};

use super::{
    request::{
        AddContestantRequest, ContestantIdRequest, GeneratePasswordRequest,
        ImportContestantsRequest, SeatAllRequest, SeatContestantRequest, ShowContestantsRequest,
    },
    response::{
        BatchResponse, ContestantRemovedResponse, ContestantResponse, ContestantsListResponse,
        SeatChangeResponse,
    },
};

/// Batch response plus the error that stopped the batch, if any
pub type BatchResult = AppResult<(BatchResponse, Option<AppError>)>;

fn batch(action: &'static str, outcome: BatchOutcome) -> (BatchResponse, Option<AppError>) {
    let response = BatchResponse::new(action, &outcome);
    if let Some(err) = &outcome.failure {
        tracing::warn!(action, processed = response.processed, error = %err, "batch stopped early");
    }
    (response, outcome.failure)
}

/// Register one contestant
pub fn add_contestant(ctx: &Context, payload: AddContestantRequest) -> AppResult<ContestantResponse> {
    payload.validate()?;
    let name = sanitize_string(&payload.name);
    if name.is_empty() {
        return Err(AppError::Validation(
            "contestant name must not be empty".to_string(),
        ));
    }

    let mut session = ctx.session()?;
    session.ensure_unlocked()?;
    session.ensure_room_for(1)?;

    let seat = payload.seat_request()?;
    let mut new = NewContestant::new(
        &name,
        payload.sid.trim(),
        payload.affiliation.trim(),
    );
    if !payload.no_password {
        new.password = Some(ctx.password_policy()?.generate());
    }

    let contestant = session.contestants.create(
        &mut session.team_ids,
        &mut session.seats,
        &session.affiliations,
        new,
        seat.as_ref(),
    )?;
    session.save_contestants()?;

    Ok(ContestantResponse::new(
        &contestant,
        &session.contest,
        &session.affiliations,
        false,
    ))
}

/// Register every row of a TSV file
///
/// Refuses up front when the rows would not fit; otherwise rows are created
/// in order and those created before a failing row are kept.
pub fn import_contestants(ctx: &Context, payload: ImportContestantsRequest) -> BatchResult {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let mut rows = ContestantRepository::read_import(&payload.file)?;
    session.ensure_room_for(rows.len())?;
    if !payload.no_password {
        let policy = ctx.password_policy()?;
        for row in &mut rows {
            row.password = Some(policy.generate());
        }
    }

    let outcome = session.contestants.create_all(
        &mut session.team_ids,
        &mut session.seats,
        &session.affiliations,
        rows,
    );
    if outcome.count() > 0 {
        session.save_contestants()?;
    }
    Ok(batch("imported", outcome))
}

/// Delete a contestant and release what they held
pub fn remove_contestant(
    ctx: &Context,
    payload: ContestantIdRequest,
) -> AppResult<ContestantRemovedResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let removed = session
        .contestants
        .remove(&mut session.team_ids, &mut session.seats, payload.id)?;
    session.save_contestants()?;

    Ok(ContestantRemovedResponse {
        id: removed.id,
        team_id: removed.team_id,
        name: removed.name,
        released_seat: removed.seat,
    })
}

/// Show one or all contestants
pub fn show_contestants(
    ctx: &Context,
    payload: ShowContestantsRequest,
) -> AppResult<ContestantsListResponse> {
    let session = ctx.session()?;
    let view = |c: &Contestant| {
        ContestantResponse::new(c, &session.contest, &session.affiliations, payload.show_password)
    };

    let contestants: Vec<ContestantResponse> = match payload.id {
        Some(id) => vec![view(session.contestants.get(id)?)],
        None => session.contestants.iter().map(view).collect(),
    };
    Ok(ContestantsListResponse {
        total: contestants.len(),
        contestants,
    })
}

/// Seat one contestant
pub fn seat_contestant(
    ctx: &Context,
    payload: SeatContestantRequest,
) -> AppResult<SeatChangeResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let request = payload.seat.to_request()?;
    let seat = session.contestants.seat(
        &mut session.seats,
        payload.id,
        &request,
        payload.override_seat,
    )?;
    session.save_contestants()?;

    Ok(SeatChangeResponse {
        id: payload.id,
        seat: Some(seat),
    })
}

/// Seat every unseated contestant
pub fn seat_all_contestants(ctx: &Context, payload: SeatAllRequest) -> BatchResult {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let rooms = (!payload.rooms.is_empty()).then(|| payload.rooms.into_iter().collect());
    let outcome = session
        .contestants
        .seat_all(&mut session.seats, payload.random, rooms);
    if outcome.count() > 0 {
        session.save_contestants()?;
    }
    Ok(batch("seated", outcome))
}

/// Take one contestant's seat away
pub fn unseat_contestant(
    ctx: &Context,
    payload: ContestantIdRequest,
) -> AppResult<SeatChangeResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    session.contestants.unseat(&mut session.seats, payload.id)?;
    session.save_contestants()?;

    Ok(SeatChangeResponse {
        id: payload.id,
        seat: None,
    })
}

/// Unseat every seated contestant
pub fn unseat_all_contestants(ctx: &Context) -> BatchResult {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let outcome = session.contestants.unseat_all(&mut session.seats);
    if outcome.count() > 0 {
        session.save_contestants()?;
    }
    Ok(batch("unseated", outcome))
}

/// Generate a password for one contestant, or for everyone
pub fn generate_passwords(ctx: &Context, payload: GeneratePasswordRequest) -> BatchResult {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;
    let policy = ctx.password_policy()?;

    let outcome = match payload.id {
        Some(id) => {
            session
                .contestants
                .generate_password(id, &policy, payload.override_password)?;
            BatchOutcome {
                processed: vec![id],
                failure: None,
            }
        }
        None => session
            .contestants
            .generate_password_for_all(&policy, payload.override_password),
    };
    if outcome.count() > 0 {
        session.save_contestants()?;
    }
    Ok(batch("passwords generated", outcome))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::handlers::{
        contest::{CreateContestRequest, create_contest, lock_contest},
        contestants::SeatArgs,
        test_support::context,
    };

    fn setup(tmp: &tempfile::TempDir, range: &str, seats: &[(&str, &str)]) -> Context {
        let ctx = context(tmp);
        create_contest(CreateContestRequest {
            directory: ctx.dir.root().to_path_buf(),
            title: "Regional".to_string(),
            team_category_ids: "3".to_string(),
            team_id_range: range.to_string(),
            account_prefix: "team".to_string(),
        })
        .unwrap();

        let mut session = ctx.session().unwrap();
        for (room, seat_id) in seats {
            session.seats.create(room, seat_id).unwrap();
        }
        session.affiliations.create("MIT", "Massachusetts Institute of Technology").unwrap();
        session.save_seats().unwrap();
        session.save_affiliations().unwrap();
        ctx
    }

    fn add_request(name: &str, auto_seat: bool) -> AddContestantRequest {
        AddContestantRequest {
            name: name.to_string(),
            sid: String::new(),
            affiliation: "MIT".to_string(),
            auto_seat,
            seat: SeatArgs::default(),
            no_password: false,
        }
    }

    #[test]
    fn test_add_persists_contestant() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-3", &[("A", "1"), ("A", "2")]);

        let added = add_contestant(&ctx, add_request("Alice", true)).unwrap();
        assert_eq!(added.account, "team1");
        assert!(added.has_password);
        assert!(added.password.is_none());

        let shown = show_contestants(
            &ctx,
            ShowContestantsRequest {
                id: Some(added.id),
                show_password: true,
            },
        )
        .unwrap();
        let password = shown.contestants[0].password.clone().unwrap();
        assert_eq!(password.len(), 8);
        assert_eq!(shown.contestants[0].seat.as_ref().map(ToString::to_string), Some("A-1".to_string()));
    }

    #[test]
    fn test_add_respects_capacity_and_lock() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-3", &[("A", "1")]);

        add_contestant(&ctx, add_request("Alice", false)).unwrap();
        let err = add_contestant(&ctx, add_request("Bob", false)).unwrap_err();
        assert!(matches!(err, AppError::CapacityExceeded(_)));

        lock_contest(&ctx).unwrap();
        let err = remove_contestant(&ctx, ContestantIdRequest { id: 1 }).unwrap_err();
        assert!(matches!(err, AppError::ContestLocked));
    }

    #[test]
    fn test_removed_ids_are_not_reissued_after_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-5", &[("A", "1"), ("A", "2"), ("A", "3")]);

        let alice = add_contestant(&ctx, add_request("Alice", false)).unwrap();
        let bob = add_contestant(&ctx, add_request("Bob", false)).unwrap();
        remove_contestant(&ctx, ContestantIdRequest { id: bob.id }).unwrap();

        let carol = add_contestant(&ctx, add_request("Carol", false)).unwrap();
        assert!(carol.id > bob.id);
        assert_eq!(carol.team_id, bob.team_id);

        remove_contestant(&ctx, ContestantIdRequest { id: alice.id }).unwrap();
        remove_contestant(&ctx, ContestantIdRequest { id: carol.id }).unwrap();
        let session = ctx.session().unwrap();
        assert!(session.contestants.is_empty());
        assert_eq!(session.contestants.max_id(), carol.id);
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-3", &[("A", "1")]);

        for name in ["   ", "\u{7}", "\t\u{1b}"] {
            let err = add_contestant(&ctx, add_request(name, false)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{name:?}");
        }
        assert!(ctx.session().unwrap().contestants.is_empty());

        let padded = add_contestant(&ctx, add_request("  Alice ", false)).unwrap();
        assert_eq!(padded.name, "Alice");
    }

    #[test]
    fn test_import_is_best_effort() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-5", &[("A", "1"), ("A", "2"), ("A", "3")]);
        let file = tmp.path().join("import.tsv");

        fs::write(&file, "Alice\t1\tMIT\nBob\t2\tETH\nCarol\t3\tMIT\n").unwrap();
        let (response, failure) = import_contestants(
            &ctx,
            ImportContestantsRequest {
                file: file.clone(),
                no_password: true,
            },
        )
        .unwrap();
        assert_eq!(response.processed, 1);
        assert!(!response.complete);
        assert!(matches!(failure, Some(AppError::UnknownAffiliation(_))));
        assert_eq!(ctx.session().unwrap().contestants.len(), 1);

        fs::write(&file, "D\t4\tMIT\nE\t5\tMIT\nF\t6\tMIT\n").unwrap();
        let err = import_contestants(&ctx, ImportContestantsRequest { file, no_password: true }).unwrap_err();
        assert!(matches!(err, AppError::CapacityExceeded(_)));
    }

    #[test]
    fn test_seat_unseat_and_passwords() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp, "1-5", &[("A", "1"), ("B", "1")]);
        for name in ["Alice", "Bob"] {
            let mut request = add_request(name, false);
            request.no_password = true;
            add_contestant(&ctx, request).unwrap();
        }

        let seated = seat_contestant(
            &ctx,
            SeatContestantRequest {
                id: 2,
                seat: SeatArgs {
                    seat: Some("B-1".to_string()),
                    ..SeatArgs::default()
                },
                override_seat: false,
            },
        )
        .unwrap();
        assert_eq!(seated.seat.unwrap().to_string(), "B-1");

        let (response, failure) = seat_all_contestants(
            &ctx,
            SeatAllRequest {
                random: false,
                rooms: Vec::new(),
            },
        )
        .unwrap();
        assert_eq!((response.processed, failure.is_none()), (1, true));
        assert_eq!(ctx.session().unwrap().readiness().seated, 2);

        unseat_contestant(&ctx, ContestantIdRequest { id: 1 }).unwrap();
        let (response, _) = unseat_all_contestants(&ctx).unwrap();
        assert_eq!(response.ids, vec![2]);

        let (response, _) = generate_passwords(
            &ctx,
            GeneratePasswordRequest {
                id: None,
                override_password: false,
            },
        )
        .unwrap();
        assert_eq!(response.processed, 2);
        let err = generate_passwords(
            &ctx,
            GeneratePasswordRequest {
                id: Some(1),
                override_password: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::PasswordExists(1)));
    }
}
