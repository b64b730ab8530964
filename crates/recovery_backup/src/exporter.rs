//! The backup run: fetch every row once, then write each configured artifact.

use crate::artifacts::{self, ArtifactFormat};
use crate::config::BackupConfig;
use crate::error::BackupResult;
use chrono::{Local, NaiveDate};
use recovery_store_client::{RecoveryStore, Row};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    pub date: NaiveDate,
    pub rows: usize,
    pub artifacts: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The table had no rows; nothing was written.
    Empty,
    Written(BackupReport),
}

pub struct Exporter {
    store: Arc<dyn RecoveryStore>,
    table: String,
    config: BackupConfig,
}

impl Exporter {
    pub fn new(
        store: Arc<dyn RecoveryStore>,
        table: impl Into<String>,
        config: BackupConfig,
    ) -> Self {
        Self {
            store,
            table: table.into(),
            config,
        }
    }

    /// Back up the table, stamping artifacts with today's local date.
    pub async fn run(&self) -> BackupResult<BackupOutcome> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Back up the table, stamping artifacts with `date`.
    pub async fn run_on(&self, date: NaiveDate) -> BackupResult<BackupOutcome> {
        tracing::info!(table = %self.table, "fetching rows");
        let rows = self.store.fetch_all(&self.table).await?;
        if rows.is_empty() {
            tracing::info!(table = %self.table, "no rows found, nothing to back up");
            return Ok(BackupOutcome::Empty);
        }
        tracing::info!(rows = rows.len(), "fetched rows");

        // The structured artifact always keeps the store's order.
        let sorted;
        let tabular: &[Row] = if self.config.sort_by_date {
            sorted = sorted_by_date(&rows);
            &sorted
        } else {
            &rows
        };

        let dir = &self.config.backup_dir;
        artifacts::ensure_dir(dir)?;

        let mut written = Vec::with_capacity(self.config.formats.len());
        for format in ArtifactFormat::ALL {
            if !self.config.formats.contains(&format) {
                continue;
            }
            let path = artifacts::artifact_path(dir, date, format);
            let source = match format {
                ArtifactFormat::Json => rows.as_slice(),
                ArtifactFormat::Csv => tabular,
            };
            format.write(&path, source)?;
            tracing::info!(path = %path.display(), "saved {}", format.extension());
            written.push(path);
        }

        Ok(BackupOutcome::Written(BackupReport {
            date,
            rows: rows.len(),
            artifacts: written,
        }))
    }
}

/// Copy of `rows` stably sorted on the `date` text; rows without one go first.
fn sorted_by_date(rows: &[Row]) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| date_key(a).cmp(&date_key(b)));
    sorted
}

fn date_key(row: &Row) -> Option<&str> {
    row.get("date").and_then(|v| v.as_str())
}
