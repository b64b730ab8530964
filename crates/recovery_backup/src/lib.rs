//! Daily backup of the recovery table to dated JSON and CSV files.

pub mod artifacts;
pub mod columns;
pub mod config;
pub mod error;
pub mod exporter;
pub mod logging;

pub use artifacts::ArtifactFormat;
pub use config::BackupConfig;
pub use error::{BackupError, BackupResult};
pub use exporter::{BackupOutcome, BackupReport, Exporter};
