use crate::StoreError;
use secrecy::SecretString;

pub const DEFAULT_TABLE: &str = "daily_entries";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub api_key: SecretString,
    pub table: String,
}

impl Config {
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StoreError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = get("RECOVERY_STORE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| StoreError::Config("RECOVERY_STORE_URL missing".into()))?;
        let api_key = get("RECOVERY_STORE_KEY")
            .map(|k| k.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| StoreError::Config("RECOVERY_STORE_KEY missing".into()))?;
        let table = get("RECOVERY_STORE_TABLE")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE.into());
        Ok(Self {
            base_url,
            api_key: SecretString::new(api_key.into()),
            table,
        })
    }
}
