//! Contest handler implementations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::Context,
    models::{Contest, TeamIdRange},
    state::Session,
    storage::ContestDir,
    utils::{sanitize_string, validation::parse_category_ids},
};

use super::{
    request::{CreateContestRequest, UnlockContestRequest},
    response::{ContestCreatedResponse, ContestResponse, LockResponse, ReadinessResponse},
};

/// Create a new contest directory
pub fn create_contest(payload: CreateContestRequest) -> AppResult<ContestCreatedResponse> {
    payload.validate()?;

    let team_category_ids =
        parse_category_ids(&payload.team_category_ids).map_err(AppError::InvalidFormat)?;
    let team_id_range: TeamIdRange = payload.team_id_range.parse()?;
    let contest = Contest {
        title: sanitize_string(&payload.title),
        team_category_ids,
        team_id_range,
        account_prefix: payload.account_prefix.trim().replace(' ', "_"),
        lock: false,
        last_contestant_id: 0,
    };

    let directory = payload.directory.display().to_string();
    let session = Session::create(ContestDir::new(payload.directory), contest)?;
    Ok(ContestCreatedResponse::new(directory, &session.contest))
}

/// Show the contest overview
pub fn show_contest(ctx: &Context) -> AppResult<ContestResponse> {
    let session = ctx.session()?;
    let contest = &session.contest;

    Ok(ContestResponse {
        title: contest.title.clone(),
        locked: contest.locked(),
        team_category_ids: contest.team_category_ids.clone(),
        team_id_range: contest.team_id_range,
        free_team_ids: session.team_ids.available(),
        account_prefix: contest.account_prefix.clone(),
        affiliation_count: session.affiliations.len(),
        rooms: session.seats.room_occupancy(),
        seat_count: session.seats.total(),
        contestant_count: session.contestants.len(),
        capacity: session.capacity(),
        readiness: session.readiness().into(),
    })
}

/// Show whether the roster is ready for the contest
pub fn contest_readiness(ctx: &Context) -> AppResult<ReadinessResponse> {
    Ok(ctx.session()?.readiness().into())
}

/// Disable roster mutations
pub fn lock_contest(ctx: &Context) -> AppResult<LockResponse> {
    set_lock(ctx, true)
}

/// Enable roster mutations again
pub fn unlock_contest(ctx: &Context, payload: UnlockContestRequest) -> AppResult<LockResponse> {
    if !payload.yes {
        return Err(AppError::Aborted(
            "unlocking lets the roster change again; pass --yes to confirm".to_string(),
        ));
    }
    set_lock(ctx, false)
}

fn set_lock(ctx: &Context, lock: bool) -> AppResult<LockResponse> {
    let mut session = ctx.session()?;
    let changed = session.contest.locked() != lock;
    if changed {
        session.contest.set_locked(lock);
        session.save_contest()?;
        tracing::info!(locked = lock, "contest lock changed");
    }
    Ok(LockResponse {
        locked: lock,
        changed,
    })
}
