//! Writers for the two backup artifacts.

use crate::columns;
use crate::error::{BackupError, BackupResult};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use recovery_store_client::Row;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const FILE_STEM: &str = "recovery-data";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Full result set, every field, pretty-printed.
    Json,
    /// Fixed columns with renamed headers.
    Csv,
}

impl ArtifactFormat {
    pub const ALL: [ArtifactFormat; 2] = [ArtifactFormat::Json, ArtifactFormat::Csv];

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Csv => "csv",
        }
    }

    /// Write `rows` to `path` in this format, replacing any existing file.
    pub fn write(self, path: &Path, rows: &[Row]) -> BackupResult<()> {
        match self {
            ArtifactFormat::Json => write_json(path, rows),
            ArtifactFormat::Csv => write_csv(path, rows),
        }
    }
}

impl FromStr for ArtifactFormat {
    type Err = BackupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ArtifactFormat::Json),
            "csv" => Ok(ArtifactFormat::Csv),
            other => Err(BackupError::Config(format!(
                "unknown artifact format '{other}' (expected json or csv)"
            ))),
        }
    }
}

/// `<dir>/recovery-data-YYYY-MM-DD.<ext>`
pub fn artifact_path(dir: &Path, date: NaiveDate, format: ArtifactFormat) -> PathBuf {
    dir.join(format!(
        "{}-{}.{}",
        FILE_STEM,
        date.format("%Y-%m-%d"),
        format.extension()
    ))
}

pub fn ensure_dir(dir: &Path) -> BackupResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| BackupError::io(dir, e))
}

fn create(path: &Path) -> BackupResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| BackupError::io(path, e))
}

pub fn write_json(path: &Path, rows: &[Row]) -> BackupResult<()> {
    let mut out = create(path)?;
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.flush().map_err(|e| BackupError::io(path, e))
}

pub fn write_csv(path: &Path, rows: &[Row]) -> BackupResult<()> {
    let out = create(path)?;
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    wtr.write_record(columns::headers())?;
    for row in rows {
        wtr.write_record(columns::record(row))?;
    }
    wtr.flush().map_err(|e| BackupError::io(path, e))
}
