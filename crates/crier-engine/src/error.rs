use crier_llm::GenerateError;
use crier_store::StoreError;

/// Failure of a provider invocation.
///
/// Fetch problems never surface here; the engine absorbs them as "no data".
/// Store and generation failures do propagate, per the host's contract.
#[derive(Clone, Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
