use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::session::TOKEN_KEY;

pub const DEFAULT_LOG_FILTER: &str = "tugas=info";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub token_path: PathBuf,
    pub log_filter: String,
}

impl ClientConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("TUGAS_API_URL")
            .ok_or_else(|| AppError::Config("TUGAS_API_URL is not set".to_string()))?;
        let base_url = normalize_base_url(&base_url)?;

        let token_path = match lookup("TUGAS_TOKEN_PATH").filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_token_path()?,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            base_url,
            token_path,
            log_filter,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "TUGAS_API_URL must start with http:// or https://, got {:?}",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

fn default_token_path() -> Result<PathBuf, AppError> {
    dirs::data_dir()
        .map(|dir| dir.join("tugas").join(TOKEN_KEY))
        .ok_or_else(|| AppError::Config("no data directory; set TUGAS_TOKEN_PATH".to_string()))
}
