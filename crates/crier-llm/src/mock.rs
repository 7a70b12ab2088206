use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::GenerateError;
use crate::generator::{ModelTier, TextGenerator};

/// Pre-programmed generator for deterministic testing without API calls.
///
/// Responses are consumed in order; once exhausted, a numbered placeholder
/// is returned. Every prompt is recorded for assertion.
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<String, GenerateError>>>,
    prompts: Mutex<Vec<(String, ModelTier)>>,
    call_count: AtomicUsize,
}

impl MockGenerator {
    pub fn new(responses: Vec<Result<String, GenerateError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Convenience: a generator that yields the given texts in order.
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok((*t).to_string())).collect())
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Prompts seen so far, oldest first.
    pub fn prompts(&self) -> Vec<(String, ModelTier)> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, tier: ModelTier) -> Result<String, GenerateError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        self.prompts.lock().push((prompt.to_string(), tier));
        match self.responses.lock().pop_front() {
            Some(response) => response,
            None => Ok(format!("mock response {n}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let mock = MockGenerator::with_texts(&["first", "second"]);
        assert_eq!(mock.generate("a", ModelTier::Medium).await.unwrap(), "first");
        assert_eq!(mock.generate("b", ModelTier::Medium).await.unwrap(), "second");
        assert_eq!(mock.generate("c", ModelTier::Medium).await.unwrap(), "mock response 2");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn errors_can_be_queued() {
        let mock = MockGenerator::new(vec![Err(GenerateError::RateLimited)]);
        let err = mock.generate("a", ModelTier::Small).await.unwrap_err();
        assert!(matches!(err, GenerateError::RateLimited));
    }

    #[tokio::test]
    async fn prompts_are_recorded() {
        let mock = MockGenerator::with_texts(&["x"]);
        let _ = mock.generate("summarize this", ModelTier::Medium).await.unwrap();
        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, "summarize this");
        assert_eq!(prompts[0].1, ModelTier::Medium);
    }
}
