use serde::{Deserialize, Serialize};

/// Action literal that asks the provider to compose a social post.
pub const POST_UPDATE_ACTION: &str = "TWEET";

/// The host's invocation input.
///
/// The provider only acts when [`IncomingMessage::action`] equals
/// [`POST_UPDATE_ACTION`]; any other trigger is a no-op.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

impl IncomingMessage {
    /// A trigger carrying the compose-a-post action.
    pub fn post_update(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: None,
            action: Some(POST_UPDATE_ACTION.to_string()),
        }
    }

    pub fn wants_post_update(&self) -> bool {
        self.action.as_deref() == Some(POST_UPDATE_ACTION)
    }
}
