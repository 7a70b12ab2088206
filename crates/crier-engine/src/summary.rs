use crier_core::{HistoryEntry, MessageKind};
use crier_llm::{ModelTier, TextGenerator};
use crier_store::MarkerStore;
use tracing::debug;

use crate::error::EngineError;
use crate::keys;

/// Summarize the accumulated Q&A knowledge, unless nothing new happened.
///
/// The gate compares the count of relevant (question/guess) entries against
/// the persisted count marker: equal means the knowledge was already
/// summarized at this point and `None` is returned. Otherwise the marker is
/// advanced to the new count and the rendered transcript goes to the
/// generator. An absent or unparseable marker never equals the current
/// count, so the first observation always generates.
pub async fn summarize_history(
    store: &dyn MarkerStore,
    generator: &dyn TextGenerator,
    history: &[HistoryEntry],
) -> Result<Option<String>, EngineError> {
    let relevant: Vec<&HistoryEntry> = history
        .iter()
        .filter(|entry| entry.message_type.is_relevant())
        .collect();
    let count = relevant.len();

    let previous = store
        .get(keys::RELEVANT_COUNT)
        .await?
        .and_then(|value| value.parse::<usize>().ok());
    if previous == Some(count) {
        debug!(count, "relevant history unchanged, skipping summary");
        return Ok(None);
    }

    store.set(keys::RELEVANT_COUNT, &count.to_string()).await?;

    let transcript = render_transcript(&relevant);
    let summary = generator
        .generate(&summary_prompt(&transcript), ModelTier::Medium)
        .await?;
    debug!(count, "knowledge summary regenerated");
    Ok(Some(summary))
}

/// Render relevant entries into `Question:`/`Answer:` and `Guess:`/`Result:`
/// line pairs. Entries lacking a user message or an answer tag contribute
/// nothing.
fn render_transcript(relevant: &[&HistoryEntry]) -> String {
    relevant
        .iter()
        .filter_map(|entry| {
            let user_message = entry.user_message.as_deref()?;
            let answer = entry.answer_result?.label();
            match entry.message_type {
                MessageKind::Question => Some(format!("Question: {user_message}\nAnswer: {answer}\n")),
                MessageKind::Guess => Some(format!("Guess: {user_message}\nResult: {answer}\n")),
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary_prompt(transcript: &str) -> String {
    format!(
        "Based on the following Q&A about a secret word guessing game, create a concise summary \
of what we know about the secret word so far.
Focus on confirmed facts (yes answers) and things that have been ruled out (no answers). \
Don't include any clues or hints.
Include everything we know about the secret word.
Keep it brief but comprehensive.
Make it a list of sentences with no more than 5 items. Do not use bullet points or numbers.
Respond only with the summary, no other text.

Q&A History:
{transcript}

Summary:
"
    )
}
