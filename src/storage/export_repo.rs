//! DOMjudge export files

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::Serialize;

use super::{ContestDir, tsv};
use crate::{
    constants::{DOMJUDGE_ACCOUNT_TYPE, DOMJUDGE_ACCOUNTS_HEADER},
    error::{AppError, AppResult},
    models::{Contest, Contestant},
    utils::{export_stamp, export_timestamp},
};

const DOMJUDGE_DIR: &str = "domjudge";
const HISTORY_DIR: &str = "history";
const PERSONAL_DIR: &str = "personal";
const ACCOUNTS_FILE: &str = "accounts.tsv";
const TEAMS_FILE: &str = "teams.json";
const TIMESTAMP_FILE: &str = "timestamp.txt";

/// One entry of `teams.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomjudgeTeam {
    pub id: String,
    pub name: String,
    pub room: String,
    pub organization_id: String,
    pub group_ids: Vec<String>,
}

/// One row of `accounts.tsv` after the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomjudgeAccount {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Accounts and teams of a set of contestants
#[derive(Debug, Clone, Default)]
pub struct DomjudgeExport {
    pub accounts: Vec<DomjudgeAccount>,
    pub teams: Vec<DomjudgeTeam>,
}

impl DomjudgeExport {
    pub fn build<'a>(contest: &Contest, contestants: impl IntoIterator<Item = &'a Contestant>) -> Self {
        let group_ids: Vec<String> = contest
            .default_category()
            .map(|id| id.to_string())
            .into_iter()
            .collect();

        let mut export = Self::default();
        for contestant in contestants {
            export.accounts.push(DomjudgeAccount {
                name: contestant.name.clone(),
                username: contest.account_name(contestant.team_id),
                password: contestant.password.clone().unwrap_or_default(),
            });
            export.teams.push(DomjudgeTeam {
                id: contestant.team_id.to_string(),
                name: contestant.name.clone(),
                room: contestant
                    .seat
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                organization_id: contestant.affiliation.clone(),
                group_ids: group_ids.clone(),
            });
        }
        export
    }

    pub fn accounts_tsv(&self) -> AppResult<String> {
        let header = std::iter::once(DOMJUDGE_ACCOUNTS_HEADER.to_vec());
        let rows = self.accounts.iter().map(|account| {
            vec![
                DOMJUDGE_ACCOUNT_TYPE,
                account.name.as_str(),
                account.username.as_str(),
                account.password.as_str(),
            ]
        });
        tsv::render(header.chain(rows))
    }

    pub fn teams_json(&self) -> AppResult<String> {
        let mut text = serde_json::to_string_pretty(&self.teams)?;
        text.push('\n');
        Ok(text)
    }

    fn write_to(&self, accounts: &Path, teams: &Path) -> AppResult<()> {
        fs::write(accounts, self.accounts_tsv()?)?;
        fs::write(teams, self.teams_json()?)?;
        Ok(())
    }
}

/// Repository for the `export/` tree
pub struct ExportRepository;

impl ExportRepository {
    fn domjudge_dir(dir: &ContestDir) -> PathBuf {
        dir.export_dir().join(DOMJUDGE_DIR)
    }

    /// Write a full export into a history directory and mirror it as latest
    ///
    /// Returns the history directory. An export already stamped with the
    /// same second is never overwritten.
    pub fn write_domjudge(
        dir: &ContestDir,
        export: &DomjudgeExport,
        at: &DateTime<Local>,
    ) -> AppResult<PathBuf> {
        let latest = Self::domjudge_dir(dir);
        let history = latest.join(HISTORY_DIR).join(export_stamp(at));
        fs::create_dir_all(latest.join(HISTORY_DIR))?;
        fs::create_dir(&history).map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => {
                AppError::AlreadyExists(format!("export {}", history.display()))
            }
            _ => err.into(),
        })?;

        export.write_to(&history.join(ACCOUNTS_FILE), &history.join(TEAMS_FILE))?;
        for file in [ACCOUNTS_FILE, TEAMS_FILE] {
            fs::copy(history.join(file), latest.join(file))?;
        }
        fs::write(latest.join(TIMESTAMP_FILE), export_timestamp(at))?;

        tracing::info!(path = %history.display(), teams = export.teams.len(), "DOMjudge export written");
        Ok(history)
    }

    /// Write a single contestant's export under `personal/`
    ///
    /// Returns the accounts file; the teams file sits next to it.
    pub fn write_domjudge_personal(
        dir: &ContestDir,
        export: &DomjudgeExport,
        contestant: &Contestant,
        account: &str,
    ) -> AppResult<PathBuf> {
        let personal = Self::domjudge_dir(dir).join(PERSONAL_DIR);
        fs::create_dir_all(&personal)?;

        let stem = format!(
            "{}-{}-{}-{}",
            contestant.id, contestant.affiliation, contestant.name, account
        )
        .replace(['/', '\\'], "_");
        let accounts = personal.join(format!("{stem}.tsv"));
        export.write_to(&accounts, &personal.join(format!("{stem}.json")))?;

        tracing::info!(contestant = contestant.id, path = %accounts.display(), "DOMjudge export written");
        Ok(accounts)
    }
}
