//! Tab separated rows

use std::{fs, io::ErrorKind, path::Path};

use crate::{
    error::{AppError, AppResult},
    utils::validation::validate_tsv_field,
};

/// One parsed row with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parse rows of exactly `columns` fields, skipping blank lines
pub fn parse(text: &str, columns: usize, source: &str) -> AppResult<Vec<Row>> {
    let mut rows = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = raw.split('\t').map(str::to_string).collect();
        if fields.len() != columns {
            return Err(AppError::InvalidFormat(format!(
                "{source}:{line}: expected {columns} tab separated columns, found {}",
                fields.len()
            )));
        }
        rows.push(Row { line, fields });
    }
    Ok(rows)
}

/// Read and parse a TSV file; a missing file has no rows
pub fn read(path: &Path, columns: usize) -> AppResult<Vec<Row>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store missing, treating as empty");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    parse(&text, columns, &path.display().to_string())
}

/// Render rows, one per line
pub fn render<'a, I, R>(rows: I) -> AppResult<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for row in rows {
        let mut first = true;
        for field in row {
            validate_tsv_field(field)
                .map_err(|reason| AppError::InvalidFormat(format!("{field:?}: {reason}")))?;
            if !first {
                out.push('\t');
            }
            out.push_str(field);
            first = false;
        }
        out.push('\n');
    }
    Ok(out)
}

/// Write rows to `path`, replacing its contents
pub fn write<'a, I, R>(path: &Path, rows: I) -> AppResult<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = &'a str>,
{
    fs::write(path, render(rows)?)?;
    Ok(())
}
