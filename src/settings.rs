use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DB_PATH: &str = "./crier.db";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

#[derive(Clone, Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration, environment-derived.
///
/// The game service URL and the OpenRouter key are required; a missing one
/// aborts startup rather than producing malformed requests later.
#[derive(Clone, Debug)]
pub struct Settings {
    pub game_url: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: Option<String>,
    pub db_path: PathBuf,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let game_url = lookup("CRIER_GAME_URL")
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::Missing("CRIER_GAME_URL"))?;
        let openrouter_api_key = lookup("OPENROUTER_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::Missing("OPENROUTER_API_KEY"))?;
        let openrouter_base_url = lookup("OPENROUTER_BASE_URL").filter(|v| !v.is_empty());

        let db_path = lookup("CRIER_DB_PATH")
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);

        let poll_interval = match lookup("CRIER_POLL_INTERVAL_SECS") {
            Some(value) => {
                let secs = value.parse::<u64>().map_err(|_| SettingsError::Invalid {
                    key: "CRIER_POLL_INTERVAL_SECS",
                    value: value.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        Ok(Self {
            game_url,
            openrouter_api_key,
            openrouter_base_url,
            db_path,
            poll_interval,
        })
    }
}
