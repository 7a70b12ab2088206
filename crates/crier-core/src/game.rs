use serde::{Deserialize, Serialize};

/// Snapshot of the game service's current state, re-fetched every invocation.
///
/// The contract address doubles as the identity of the game instance: a new
/// deployment means a new game. Optional fields are absent while the game is
/// unresolved (no winner yet) or on deployments that don't populate them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub contract_address: String,
    #[serde(default)]
    pub initial_fee: Option<String>,
    #[serde(default)]
    pub current_fee: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub game_abandoned: bool,
    #[serde(default)]
    pub winner_address: Option<String>,
    /// Link to the won word-NFT, on deployments that mint one.
    #[serde(default)]
    pub nft_url: Option<String>,
}

impl GameDetails {
    pub fn has_winner(&self) -> bool {
        self.winner_address.as_deref().is_some_and(|w| !w.is_empty())
    }
}
