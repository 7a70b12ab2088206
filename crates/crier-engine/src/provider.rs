use std::sync::Arc;

use crier_client::GameClient;
use crier_core::IncomingMessage;
use crier_llm::TextGenerator;
use crier_store::MarkerStore;
use tracing::{info, warn};

use crate::error::EngineError;
use crate::keys;
use crate::summary::summarize_history;
use crate::update::{classify, compose};

/// The notification-composition provider.
///
/// Stateless between invocations apart from the two markers it keeps in the
/// injected [`MarkerStore`]. One `provide` call is one complete decision;
/// the host invokes it in sequence, never concurrently.
pub struct GameUpdateProvider {
    client: GameClient,
    store: Arc<dyn MarkerStore>,
    generator: Arc<dyn TextGenerator>,
}

impl GameUpdateProvider {
    pub fn new(
        client: GameClient,
        store: Arc<dyn MarkerStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self { client, store, generator }
    }

    /// Decide whether a noteworthy state change occurred and compose the
    /// directive describing it.
    ///
    /// Returns `Ok("")` when the trigger isn't a post request, when game
    /// details are unavailable, or when no transition fired. Store and
    /// generation failures propagate; fetch failures don't.
    pub async fn provide(&self, message: &IncomingMessage) -> Result<String, EngineError> {
        if !message.wants_post_update() {
            return Ok(String::new());
        }

        let details = match self.client.game_details().await {
            Ok(details) => details,
            Err(error) => {
                warn!(%error, kind = error.error_kind(), "failed to fetch game details");
                return Ok(String::new());
            }
        };

        let history = match self.client.history().await {
            Ok(history) => history,
            Err(error) => {
                // Unavailable history can mean "no interactions yet"; the
                // rest of the pipeline still runs against the snapshot.
                warn!(%error, kind = error.error_kind(), "failed to fetch game history");
                Vec::new()
            }
        };

        let summary = summarize_history(self.store.as_ref(), self.generator.as_ref(), &history).await?;

        let previous_address = self.store.get(keys::LAST_GAME_ADDRESS).await?;
        let transitions = classify(&details, previous_address.as_deref(), summary.is_some());
        if !transitions.is_empty() {
            let fired: Vec<&str> = transitions.iter().map(|t| t.as_str()).collect();
            info!(game = %details.contract_address, transitions = ?fired, "game transitions detected");
        }

        let result = compose(&details, &transitions, summary.as_deref());

        // The identity marker always tracks the snapshot we just classified,
        // whether or not anything fired.
        self.store
            .set(keys::LAST_GAME_ADDRESS, &details.contract_address)
            .await?;

        Ok(result)
    }
}
