use crier_core::{GameDetails, HistoryEntry};
use tracing::debug;

use crate::error::FetchError;

const GAME_DETAILS_PATH: &str = "/api/get-game-details";
const MESSAGES_PATH: &str = "/api/get-messages";

/// HTTP client for the game service's read endpoints.
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Create a client for the given base URL. A trailing slash is stripped
    /// before path concatenation.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client sharing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current game snapshot.
    pub async fn game_details(&self) -> Result<GameDetails, FetchError> {
        let url = format!("{}{GAME_DETAILS_PATH}", self.base_url);
        debug!(%url, "fetching game details");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: status.as_u16(), body });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Fetch the ordered question/guess log, system messages excluded.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, FetchError> {
        let url = format!("{}{MESSAGES_PATH}", self.base_url);
        debug!(%url, "fetching game history");
        let response = self
            .client
            .get(&url)
            .query(&[("includeSystemMessages", "false")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: status.as_u16(), body });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
