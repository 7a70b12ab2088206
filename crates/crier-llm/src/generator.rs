use async_trait::async_trait;

use crate::error::GenerateError;

/// Coarse model-size selector. Implementations map tiers to concrete models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelTier {
    Small,
    Medium,
    Large,
}

impl ModelTier {
    /// Stable label for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Free-text prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, tier: ModelTier) -> Result<String, GenerateError>;
}
