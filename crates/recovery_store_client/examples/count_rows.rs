use recovery_store_client::{
    RecoveryStore, config::Config, http_client::ReqwestRecoveryStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects RECOVERY_STORE_URL and RECOVERY_STORE_KEY in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let store = ReqwestRecoveryStore::from_config(&cfg)?;
    let rows = store.fetch_all(&cfg.table).await?;
    println!("{}: {} rows", cfg.table, rows.len());
    Ok(())
}
