use crate::artifacts::ArtifactFormat;
use crate::error::{BackupError, BackupResult};
use std::path::PathBuf;

/// Where and what to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackupConfig {
    pub backup_dir: PathBuf,
    pub formats: Vec<ArtifactFormat>,
    pub sort_by_date: bool,
}

impl BackupConfig {
    /// Write both artifacts into `backup_dir`, keeping the store's row order.
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            formats: ArtifactFormat::ALL.to_vec(),
            sort_by_date: false,
        }
    }

    pub fn from_env() -> BackupResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> BackupResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let backup_dir = get("RECOVERY_BACKUP_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| BackupError::Config("RECOVERY_BACKUP_DIR missing".into()))?;
        let formats = match get("RECOVERY_BACKUP_FORMATS") {
            Some(raw) => parse_formats(&raw)?,
            None => ArtifactFormat::ALL.to_vec(),
        };
        let sort_by_date = match get("RECOVERY_BACKUP_SORT_BY_DATE") {
            Some(raw) => parse_flag("RECOVERY_BACKUP_SORT_BY_DATE", &raw)?,
            None => false,
        };
        Ok(Self {
            backup_dir,
            formats,
            sort_by_date,
        })
    }
}

fn parse_formats(raw: &str) -> BackupResult<Vec<ArtifactFormat>> {
    let mut formats = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let f: ArtifactFormat = part.parse()?;
        if !formats.contains(&f) {
            formats.push(f);
        }
    }
    if formats.is_empty() {
        return Err(BackupError::Config(
            "RECOVERY_BACKUP_FORMATS names no formats".into(),
        ));
    }
    Ok(formats)
}

fn parse_flag(name: &str, raw: &str) -> BackupResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BackupError::Config(format!(
            "{name}: expected a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_dir() {
        let res = BackupConfig::from_env_with(|_| None);
        assert!(matches!(res, Err(BackupError::Config(_))));
    }

    #[test]
    fn from_env_defaults() {
        let get = |k: &str| match k {
            "RECOVERY_BACKUP_DIR" => Some("/tmp/backups".into()),
            _ => None,
        };
        let cfg = BackupConfig::from_env_with(get).expect("cfg");
        assert_eq!(cfg, BackupConfig::new("/tmp/backups"));
        assert_eq!(cfg.formats, vec![ArtifactFormat::Json, ArtifactFormat::Csv]);
        assert!(!cfg.sort_by_date);
    }

    #[test]
    fn from_env_reads_formats_and_sort() {
        let get = |k: &str| match k {
            "RECOVERY_BACKUP_DIR" => Some("/tmp/backups".into()),
            "RECOVERY_BACKUP_FORMATS" => Some("csv, CSV".into()),
            "RECOVERY_BACKUP_SORT_BY_DATE" => Some("Yes".into()),
            _ => None,
        };
        let cfg = BackupConfig::from_env_with(get).expect("cfg");
        assert_eq!(cfg.formats, vec![ArtifactFormat::Csv]);
        assert!(cfg.sort_by_date);
    }

    #[test]
    fn from_env_rejects_unknown_format() {
        let get = |k: &str| match k {
            "RECOVERY_BACKUP_DIR" => Some("/tmp/backups".into()),
            "RECOVERY_BACKUP_FORMATS" => Some("json,xlsx".into()),
            _ => None,
        };
        assert!(BackupConfig::from_env_with(get).is_err());
    }

    #[test]
    fn from_env_rejects_empty_format_list() {
        let get = |k: &str| match k {
            "RECOVERY_BACKUP_DIR" => Some("/tmp/backups".into()),
            "RECOVERY_BACKUP_FORMATS" => Some(" , ".into()),
            _ => None,
        };
        assert!(BackupConfig::from_env_with(get).is_err());
    }

    #[test]
    fn from_env_rejects_bad_flag() {
        let get = |k: &str| match k {
            "RECOVERY_BACKUP_DIR" => Some("/tmp/backups".into()),
            "RECOVERY_BACKUP_SORT_BY_DATE" => Some("maybe".into()),
            _ => None,
        };
        assert!(BackupConfig::from_env_with(get).is_err());
    }
}
