//! Export handler implementations

use crate::{
    error::AppResult,
    handlers::Context,
    storage::{ExportRepository, export_repo::DomjudgeExport},
    utils::now_local,
};

use super::{request::DomjudgeExportRequest, response::ExportResponse};

/// Write DOMjudge `accounts.tsv` and `teams.json`
pub fn export_domjudge(ctx: &Context, payload: DomjudgeExportRequest) -> AppResult<ExportResponse> {
    let session = ctx.session()?;
    let readiness = session.readiness();
    if !readiness.is_ready() {
        tracing::warn!(issues = ?readiness.issues(), "exporting a roster that is not ready");
    }

    let (path, teams) = match payload.contestant {
        Some(id) => {
            let contestant = session.contestants.get(id)?;
            let export = DomjudgeExport::build(&session.contest, [contestant]);
            let account = session.contest.account_name(contestant.team_id);
            let path =
                ExportRepository::write_domjudge_personal(&session.dir, &export, contestant, &account)?;
            (path, export.teams.len())
        }
        None => {
            let export = DomjudgeExport::build(&session.contest, session.contestants.iter());
            let path = ExportRepository::write_domjudge(&session.dir, &export, &now_local())?;
            (path, export.teams.len())
        }
    };

    Ok(ExportResponse {
        path: path.display().to_string(),
        teams,
        ready: readiness.is_ready(),
    })
}
