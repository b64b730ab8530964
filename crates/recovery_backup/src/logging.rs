//! Log filter setup for the binary.

use tracing_subscriber::EnvFilter;

/// Per-target overrides keeping the HTTP stack quiet by default.
const QUIET_DEPS: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

/// Resolve the base log level: `RECOVERY_BACKUP_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_level_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("RECOVERY_BACKUP_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("{log_level},{QUIET_DEPS}"))
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{QUIET_DEPS}")))
}

/// Install the global subscriber: compact, stderr, no colours.
pub fn init() {
    let log_level = log_level_with(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_level))
        .init();
    tracing::debug!("log filter: {}", log_level);
}
