use crier_core::{GameDetails, Transition};

/// Literal opening every directive block. Downstream posters key on it.
pub const POST_MARKER: &str = "POST AN UPDATE ABOUT THE FOLLOWING:";

/// Classify the current snapshot into the transitions it exhibits.
///
/// Evaluation order is fixed (new game, won, abandoned, knowledge) and all
/// matching categories fire; each composes its own block. A previous
/// identity only counts when non-empty, and the comparison is exact.
pub fn classify(
    details: &GameDetails,
    previous_address: Option<&str>,
    has_new_summary: bool,
) -> Vec<Transition> {
    let mut transitions = Vec::new();

    if previous_address.is_some_and(|prev| !prev.is_empty() && prev != details.contract_address) {
        transitions.push(Transition::NewGame);
    }
    if details.has_winner() {
        transitions.push(Transition::GameWon);
    }
    if details.game_abandoned {
        transitions.push(Transition::GameAbandoned);
    }
    if has_new_summary {
        transitions.push(Transition::KnowledgeUpdate);
    }

    transitions
}

/// Render one directive block per fired transition, blank-line separated.
/// Returns the empty string when nothing fired.
pub fn compose(details: &GameDetails, transitions: &[Transition], summary: Option<&str>) -> String {
    let blocks: Vec<String> = transitions
        .iter()
        .filter_map(|transition| match transition {
            Transition::NewGame => Some(new_game_block()),
            Transition::GameWon => game_won_block(details),
            Transition::GameAbandoned => Some(game_abandoned_block(details)),
            Transition::KnowledgeUpdate => summary.map(|s| knowledge_block(details, s)),
        })
        .collect();
    blocks.join("\n\n")
}

fn new_game_block() -> String {
    format!(
        "{POST_MARKER}\n\
         - A new game has started.\n\
         - Invite the community to guess the word."
    )
}

fn game_won_block(details: &GameDetails) -> Option<String> {
    let winner = details.winner_address.as_deref()?;
    let prize_line = match details.nft_url.as_deref() {
        Some(url) => format!("- The won word NFT is available at {url}."),
        None => format!(
            "- The winner can claim the prize using the game contract. \
             The game contract address is {}.",
            details.contract_address
        ),
    };
    Some(format!(
        "{POST_MARKER}\n\
         - The game has ended. The winner is {winner}.\n\
         {prize_line}\n\
         - The next game will start soon."
    ))
}

fn game_abandoned_block(details: &GameDetails) -> String {
    format!(
        "{POST_MARKER}\n\
         - The game has ended due to inactivity.\n\
         - Users can claim their share using the game contract. \
         The game contract address is {}.\n\
         - The next game will start soon.",
        details.contract_address
    )
}

fn knowledge_block(details: &GameDetails, summary: &str) -> String {
    let mut block = format!(
        "{POST_MARKER}\n\
         - Here is what we know about the secret word so far:\n\
         {summary}"
    );
    if let Some(prize_pool) = details.prize_pool.as_deref() {
        block.push_str(&format!("\n- The prize pool is {prize_pool}."));
    }
    block.push_str("\n- Invite the community to keep guessing the word.");
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> GameDetails {
        GameDetails {
            contract_address: "0xGAME".into(),
            initial_fee: None,
            current_fee: None,
            prize_pool: Some("10 ETH".into()),
            game_abandoned: false,
            winner_address: None,
            nft_url: None,
        }
    }

    #[test]
    fn no_previous_marker_is_not_a_new_game() {
        let transitions = classify(&details(), None, false);
        assert!(transitions.is_empty());
    }

    #[test]
    fn same_previous_address_is_not_a_new_game() {
        let transitions = classify(&details(), Some("0xGAME"), false);
        assert!(transitions.is_empty());
    }

    #[test]
    fn empty_previous_address_is_not_a_new_game() {
        let transitions = classify(&details(), Some(""), false);
        assert!(transitions.is_empty());
    }

    #[test]
    fn changed_address_fires_new_game() {
        let transitions = classify(&details(), Some("0xOLD"), false);
        assert_eq!(transitions, vec![Transition::NewGame]);
    }

    #[test]
    fn all_matching_categories_fire_in_order() {
        let snapshot = GameDetails {
            winner_address: Some("0xABC".into()),
            game_abandoned: true,
            ..details()
        };
        let transitions = classify(&snapshot, Some("0xOLD"), true);
        assert_eq!(
            transitions,
            vec![
                Transition::NewGame,
                Transition::GameWon,
                Transition::GameAbandoned,
                Transition::KnowledgeUpdate
            ]
        );
    }

    #[test]
    fn compose_nothing_is_empty() {
        assert_eq!(compose(&details(), &[], None), "");
    }

    #[test]
    fn new_game_block_invites_guessing() {
        let text = compose(&details(), &[Transition::NewGame], None);
        assert!(text.starts_with(POST_MARKER));
        assert!(text.contains("- A new game has started."));
        assert!(text.contains("- Invite the community to guess the word."));
    }

    #[test]
    fn won_block_without_nft_has_claim_instruction() {
        let snapshot = GameDetails {
            winner_address: Some("0xABC".into()),
            ..details()
        };
        let text = compose(&snapshot, &[Transition::GameWon], None);
        assert!(text.contains("The winner is 0xABC."));
        assert!(text.contains("The game contract address is 0xGAME."));
        assert!(text.contains("- The next game will start soon."));
    }

    #[test]
    fn won_block_with_nft_embeds_link_instead() {
        let snapshot = GameDetails {
            winner_address: Some("0xABC".into()),
            nft_url: Some("https://example.com/nft/1".into()),
            ..details()
        };
        let text = compose(&snapshot, &[Transition::GameWon], None);
        assert!(text.contains("The winner is 0xABC."));
        assert!(text.contains("https://example.com/nft/1"));
        assert!(!text.contains("The game contract address is"));
    }

    #[test]
    fn abandoned_block_references_contract() {
        let text = compose(&details(), &[Transition::GameAbandoned], None);
        assert!(text.contains("- The game has ended due to inactivity."));
        assert!(text.contains("The game contract address is 0xGAME."));
        assert!(text.contains("- The next game will start soon."));
    }

    #[test]
    fn knowledge_block_embeds_summary_and_prize_pool() {
        let text = compose(
            &details(),
            &[Transition::KnowledgeUpdate],
            Some("It is alive. It is not a cat."),
        );
        assert!(text.contains("It is alive. It is not a cat."));
        assert!(text.contains("- The prize pool is 10 ETH."));
        assert!(text.contains("- Invite the community to keep guessing the word."));
    }

    #[test]
    fn knowledge_block_omits_missing_prize_pool() {
        let snapshot = GameDetails { prize_pool: None, ..details() };
        let text = compose(&snapshot, &[Transition::KnowledgeUpdate], Some("Nothing yet."));
        assert!(!text.contains("prize pool"));
    }

    #[test]
    fn blocks_are_blank_line_separated() {
        let snapshot = GameDetails {
            winner_address: Some("0xABC".into()),
            ..details()
        };
        let text = compose(
            &snapshot,
            &[Transition::NewGame, Transition::GameWon],
            None,
        );
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.starts_with(POST_MARKER)));
    }
}
