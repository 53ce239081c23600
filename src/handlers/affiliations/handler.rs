//! Affiliation handler implementations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::Context,
    services::AffiliationReferences,
    state::Session,
    storage::AffiliationRepository,
    utils::sanitize_string,
};

use super::{
    request::{
        AddAffiliationRequest, AffiliationKeyRequest, ImportAffiliationsRequest,
        ShowAffiliationsRequest,
    },
    response::{AffiliationResponse, AffiliationUpdateResponse, AffiliationsListResponse},
};

fn affiliation_view(session: &Session, key: &str, fullname: &str) -> AffiliationResponse {
    AffiliationResponse {
        key: key.to_string(),
        fullname: fullname.to_string(),
        members: session.contestants.member_count(key),
    }
}

/// Add one affiliation
pub fn add_affiliation(
    ctx: &Context,
    payload: AddAffiliationRequest,
) -> AppResult<AffiliationUpdateResponse> {
    payload.validate()?;

    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let affiliation = session
        .affiliations
        .create(payload.key.trim(), &sanitize_string(&payload.fullname))?;
    session.save_affiliations()?;
    tracing::info!(key = %affiliation.key, "affiliation added");

    Ok(AffiliationUpdateResponse {
        action: "added",
        keys: vec![affiliation.key],
        total: session.affiliations.len(),
    })
}

/// Add every affiliation of a TSV file, or none of them
pub fn import_affiliations(
    ctx: &Context,
    payload: ImportAffiliationsRequest,
) -> AppResult<AffiliationUpdateResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    if !payload.file.is_file() {
        return Err(AppError::NotFound(format!("Import file {}", payload.file.display())));
    }
    let mut registry = session.affiliations.clone();
    let mut keys = Vec::new();
    for (line, key, fullname) in AffiliationRepository::read(&payload.file)? {
        let affiliation = registry
            .create(key.trim(), fullname.trim())
            .map_err(|err| match err {
                AppError::InvalidFormat(reason) | AppError::Validation(reason) => {
                    AppError::InvalidFormat(format!("{}:{line}: {reason}", payload.file.display()))
                }
                other => other,
            })?;
        keys.push(affiliation.key);
    }

    session.affiliations = registry;
    session.save_affiliations()?;
    tracing::info!(count = keys.len(), "affiliations imported");

    Ok(AffiliationUpdateResponse {
        action: "imported",
        total: session.affiliations.len(),
        keys,
    })
}

/// Remove an affiliation no contestant belongs to
pub fn remove_affiliation(
    ctx: &Context,
    payload: AffiliationKeyRequest,
) -> AppResult<AffiliationUpdateResponse> {
    let mut session = ctx.session()?;
    session.ensure_unlocked()?;

    let removed = session
        .affiliations
        .remove(&payload.key, &session.contestants)?;
    session.save_affiliations()?;
    tracing::info!(key = %removed.key, "affiliation removed");

    Ok(AffiliationUpdateResponse {
        action: "removed",
        keys: vec![removed.key],
        total: session.affiliations.len(),
    })
}

/// Show one or all affiliations with member counts
pub fn show_affiliations(
    ctx: &Context,
    payload: ShowAffiliationsRequest,
) -> AppResult<AffiliationsListResponse> {
    let session = ctx.session()?;
    let affiliations = match &payload.key {
        Some(key) => {
            let fullname = session
                .affiliations
                .fullname(key)
                .ok_or_else(|| AppError::NotFound(format!("Affiliation {key}")))?;
            vec![affiliation_view(&session, key, fullname)]
        }
        None => session
            .affiliations
            .iter()
            .map(|(key, fullname)| affiliation_view(&session, key, fullname))
            .collect(),
    };
    Ok(AffiliationsListResponse {
        total: affiliations.len(),
        affiliations,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::handlers::{
        contest::{CreateContestRequest, create_contest, lock_contest},
        contestants::{AddContestantRequest, ContestantIdRequest, SeatArgs, add_contestant, remove_contestant},
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
        let mut session = ctx.session().unwrap();
        session.seats.create("A", "1").unwrap();
        session.save_seats().unwrap();
        ctx
    }

    fn add(ctx: &Context, key: &str, fullname: &str) -> AppResult<AffiliationUpdateResponse> {
        add_affiliation(
            ctx,
            AddAffiliationRequest {
                key: key.to_string(),
                fullname: fullname.to_string(),
            },
        )
    }

    #[test]
    fn test_remove_guarded_by_members() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        add(&ctx, "MIT", "Massachusetts Institute of Technology").unwrap();
        assert!(matches!(add(&ctx, "MIT", "Again"), Err(AppError::AlreadyExists(_))));

        add_contestant(
            &ctx,
            AddContestantRequest {
                name: "Alice".to_string(),
                sid: String::new(),
                affiliation: "MIT".to_string(),
                auto_seat: false,
                seat: SeatArgs::default(),
                no_password: true,
            },
        )
        .unwrap();

        let key = || AffiliationKeyRequest {
            key: "MIT".to_string(),
        };
        let err = remove_affiliation(&ctx, key()).unwrap_err();
        assert!(matches!(err, AppError::AffiliationInUse { member: 1, .. }));

        let shown = show_affiliations(&ctx, ShowAffiliationsRequest { key: None }).unwrap();
        assert_eq!(shown.affiliations[0].members, 1);

        remove_contestant(&ctx, ContestantIdRequest { id: 1 }).unwrap();
        assert_eq!(remove_affiliation(&ctx, key()).unwrap().total, 0);
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        let file = tmp.path().join("affiliations.tsv");

        fs::write(&file, "MIT\tMassachusetts Institute of Technology\nCMU\n").unwrap();
        assert!(matches!(
            import_affiliations(&ctx, ImportAffiliationsRequest { file: file.clone() }),
            Err(AppError::InvalidFormat(_))
        ));
        assert!(ctx.session().unwrap().affiliations.is_empty());

        fs::write(&file, "MIT\tMassachusetts Institute of Technology\nCMU\tCarnegie Mellon University\n").unwrap();
        let imported = import_affiliations(&ctx, ImportAffiliationsRequest { file }).unwrap();
        assert_eq!(imported.keys, vec!["MIT", "CMU"]);
        assert!(matches!(
            show_affiliations(&ctx, ShowAffiliationsRequest { key: Some("ETH".to_string()) }),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_locked_contest_rejects_changes() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = setup(&tmp);
        add(&ctx, "MIT", "Massachusetts Institute of Technology").unwrap();
        let file = tmp.path().join("affiliations.tsv");
        fs::write(&file, "CMU\tCarnegie Mellon University\n").unwrap();
        lock_contest(&ctx).unwrap();

        assert!(matches!(add(&ctx, "ETH", "ETH Zurich"), Err(AppError::ContestLocked)));
        assert!(matches!(
            import_affiliations(&ctx, ImportAffiliationsRequest { file }),
            Err(AppError::ContestLocked)
        ));
        assert!(matches!(
            remove_affiliation(&ctx, AffiliationKeyRequest { key: "MIT".to_string() }),
            Err(AppError::ContestLocked)
        ));

        let keys: Vec<String> = ctx.session().unwrap().affiliations.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["MIT"]);
    }
}
