/// A notable game-state change observed by one invocation.
///
/// Closed set, evaluated in declaration order: a game rollover is reported
/// before the outcome of the game now in view, and knowledge updates come
/// last. Several transitions can fire in the same invocation; each renders
/// its own directive block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The game identity changed since the last invocation.
    NewGame,
    /// The current game reports a winner.
    GameWon,
    /// The current game was abandoned due to inactivity.
    GameAbandoned,
    /// Accumulated knowledge about the secret word changed.
    KnowledgeUpdate,
}

impl Transition {
    /// Stable label for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewGame => "new_game",
            Self::GameWon => "game_won",
            Self::GameAbandoned => "game_abandoned",
            Self::KnowledgeUpdate => "knowledge_update",
        }
    }
}
