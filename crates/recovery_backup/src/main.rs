use std::sync::Arc;

use anyhow::Context;
use recovery_backup::{BackupConfig, BackupOutcome, Exporter, logging};
use recovery_store_client::{config::Config, http_client::ReqwestRecoveryStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    logging::init();

    let store_cfg = Config::from_env().context("loading store configuration")?;
    let backup_cfg = BackupConfig::from_env().context("loading backup configuration")?;
    tracing::debug!(
        base_url = %store_cfg.base_url,
        table = %store_cfg.table,
        backup_dir = %backup_cfg.backup_dir.display(),
        "configuration loaded"
    );

    let store = ReqwestRecoveryStore::from_config(&store_cfg)?;
    let exporter = Exporter::new(Arc::new(store), store_cfg.table.clone(), backup_cfg);

    match exporter.run().await.context("backup failed")? {
        BackupOutcome::Empty => {}
        BackupOutcome::Written(report) => {
            tracing::info!(
                rows = report.rows,
                files = report.artifacts.len(),
                "backup complete for {}",
                report.date
            );
        }
    }
    Ok(())
}
