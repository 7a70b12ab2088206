use serde::{Deserialize, Serialize};

/// Kind tag of a history entry. Arrives on the wire as an integer.
///
/// Unknown tags decode to [`MessageKind::Other`] so a single unrecognized
/// entry can't fail the whole history payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MessageKind {
    Question,
    Guess,
    System,
    Other,
}

impl From<u8> for MessageKind {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Self::Question,
            1 => Self::Guess,
            2 => Self::System,
            _ => Self::Other,
        }
    }
}

impl From<MessageKind> for u8 {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Question => 0,
            MessageKind::Guess => 1,
            MessageKind::System => 2,
            MessageKind::Other => 3,
        }
    }
}

impl MessageKind {
    /// Whether entries of this kind feed the knowledge summary.
    pub fn is_relevant(self) -> bool {
        matches!(self, Self::Question | Self::Guess)
    }
}

/// Classification of the game's reply to a question or guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum AnswerResult {
    Yes,
    No,
    Correct,
    Incorrect,
    Unknown,
}

impl From<u8> for AnswerResult {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Self::Yes,
            1 => Self::No,
            2 => Self::Correct,
            3 => Self::Incorrect,
            _ => Self::Unknown,
        }
    }
}

impl From<AnswerResult> for u8 {
    fn from(result: AnswerResult) -> Self {
        match result {
            AnswerResult::Yes => 0,
            AnswerResult::No => 1,
            AnswerResult::Correct => 2,
            AnswerResult::Incorrect => 3,
            AnswerResult::Unknown => 4,
        }
    }
}

impl AnswerResult {
    /// Word used when rendering this result into a transcript line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Correct => "Correct!",
            Self::Incorrect => "Incorrect",
            Self::Unknown => "Unknown",
        }
    }
}

/// One exchange in the game's Q&A / guess log.
///
/// Insertion order is chronological order; the fetch returns the full log.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    /// Milliseconds since the epoch, as reported by the service.
    pub timestamp: i64,
    pub message_type: MessageKind,
    #[serde(default)]
    pub user_message: Option<String>,
    pub llm_message: String,
    #[serde(default)]
    pub answer_result: Option<AnswerResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_kind_decodes_from_integer_tags() {
        let kinds: Vec<MessageKind> = serde_json::from_str("[0, 1, 2, 3]").unwrap();
        assert_eq!(
            kinds,
            vec![
                MessageKind::Question,
                MessageKind::Guess,
                MessageKind::System,
                MessageKind::Other
            ]
        );
    }

    #[test]
    fn unknown_kind_tag_degrades_to_other() {
        let kind: MessageKind = serde_json::from_str("42").unwrap();
        assert_eq!(kind, MessageKind::Other);
    }

    #[test]
    fn unknown_answer_tag_degrades_to_unknown() {
        let result: AnswerResult = serde_json::from_str("9").unwrap();
        assert_eq!(result, AnswerResult::Unknown);
    }

    #[test]
    fn only_questions_and_guesses_are_relevant() {
        assert!(MessageKind::Question.is_relevant());
        assert!(MessageKind::Guess.is_relevant());
        assert!(!MessageKind::System.is_relevant());
        assert!(!MessageKind::Other.is_relevant());
    }

    #[test]
    fn answer_labels() {
        assert_eq!(AnswerResult::Yes.label(), "Yes");
        assert_eq!(AnswerResult::No.label(), "No");
        assert_eq!(AnswerResult::Correct.label(), "Correct!");
        assert_eq!(AnswerResult::Incorrect.label(), "Incorrect");
        assert_eq!(AnswerResult::Unknown.label(), "Unknown");
    }

    #[test]
    fn entry_decodes_with_optional_fields_absent() {
        let json = r#"{
            "id": "m1",
            "userId": "u1",
            "timestamp": 1700000000000,
            "messageType": 2,
            "llmMessage": "Welcome to the game."
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.message_type, MessageKind::System);
        assert!(entry.user_message.is_none());
        assert!(entry.answer_result.is_none());
    }

    #[test]
    fn entry_decodes_question_with_answer() {
        let json = r#"{
            "id": "m2",
            "userId": "u1",
            "timestamp": 1700000001000,
            "messageType": 0,
            "userMessage": "Is it alive?",
            "llmMessage": "Yes, it is.",
            "answerResult": 0
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.message_type, MessageKind::Question);
        assert_eq!(entry.answer_result, Some(AnswerResult::Yes));
        assert_eq!(entry.user_message.as_deref(), Some("Is it alive?"));
    }
}
