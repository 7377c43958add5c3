//! Generative-AI collaborator: new card sets from a topic, short answers
//! from the assistant.
//!
//! [`Tutor`] is the seam the rest of the app talks to. [`GeminiTutor`] is the
//! network implementation; [`worker::TutorWorker`] runs calls off the UI
//! thread.

pub mod gemini;
pub mod worker;

pub use gemini::GeminiTutor;

use crate::error::GenerationError;
use crate::models::FlashCard;

/// Number of cards requested per generated unit.
pub const CARDS_PER_UNIT: usize = 20;

/// Answer used when the service replies with nothing.
pub const EMPTY_ANSWER: &str = "I'm a bit tired today, dearie. Ask me again later!";
/// Answer used when the service cannot be reached.
pub const FAILED_ANSWER: &str =
    "The samovar is boiling over! I can't talk right now. (Error connection)";

pub trait Tutor: Send + Sync {
    /// Cards for `topic`. Fails on transport errors, malformed output, or an
    /// empty list.
    fn generate_deck(&self, topic: &str) -> Result<Vec<FlashCard>, GenerationError>;

    /// Answer to `question` about `context_word`. Never fails: falls back to a
    /// canned reply.
    fn ask(&self, question: &str, context_word: &str) -> String;
}

pub fn deck_prompt(topic: &str) -> String {
    format!(
        "Create a set of {CARDS_PER_UNIT} Russian-English flashcards for the topic: \"{topic}\". \
         Each flashcard must include the Russian word (f), English translation (t), \
         phonetic transcription (p), and a short usage context or interesting fact (c)."
    )
}

pub fn ask_prompt(question: &str, context_word: &str) -> String {
    format!(
        "User is learning Russian. Current word/topic: \"{context_word}\". User asks: \"{question}\". \
         Respond as a friendly Russian grandmother (Babushka). Keep it encouraging and informative \
         about language or culture. Use a mix of English and small Russian phrases. \
         Keep response under 100 words."
    )
}

/// Parses the JSON card list returned by the model.
pub fn parse_cards(text: &str) -> Result<Vec<FlashCard>, GenerationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::Empty);
    }
    let cards: Vec<FlashCard> =
        serde_json::from_str(text).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    if cards.is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cards() {
        let text = r#" [{"f":"ракета","t":"rocket","p":"ra-KYE-ta","c":"Ракета летит."}] "#;
        let cards = parse_cards(text).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].translation, "rocket");
    }

    #[test]
    fn test_parse_empty_list_fails() {
        assert!(matches!(parse_cards("[]"), Err(GenerationError::Empty)));
        assert!(matches!(parse_cards("  "), Err(GenerationError::Empty)));
    }

    #[test]
    fn test_parse_malformed_fails() {
        assert!(matches!(
            parse_cards(r#"{"f":"not a list"}"#),
            Err(GenerationError::Malformed(_))
        ));
        assert!(matches!(
            parse_cards(r#"[{"f":"missing fields"}]"#),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn test_prompts_mention_inputs() {
        assert!(deck_prompt("Space").contains("\"Space\""));
        assert!(deck_prompt("Space").contains("20"));
        let prompt = ask_prompt("How do I say it?", "привет");
        assert!(prompt.contains("привет"));
        assert!(prompt.contains("How do I say it?"));
    }
}
