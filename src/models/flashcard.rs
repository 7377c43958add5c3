//! FlashCard is a Russian word with its translation, pronunciation and a usage note.
//! Stored and shared with the short keys `f`, `t`, `p`, `c`.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCard {
    #[serde(rename = "f", alias = "front")]
    pub front: String,
    #[serde(rename = "t", alias = "translation")]
    pub translation: String,
    #[serde(rename = "p", alias = "phonetic")]
    pub phonetic: String,
    #[serde(rename = "c", alias = "context")]
    pub context: String,
}

impl FlashCard {
    pub fn new(
        front: impl Into<String>,
        translation: impl Into<String>,
        phonetic: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            translation: translation.into(),
            phonetic: phonetic.into(),
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = FlashCard::new("привет", "hello", "pree-VYET", "Informal greeting");

        assert_eq!(card.front, "привет");
        assert_eq!(card.translation, "hello");
        assert_eq!(card.phonetic, "pree-VYET");
        assert_eq!(card.context, "Informal greeting");
    }

    #[test]
    fn test_flashcard_serializes_short_keys() {
        let card = FlashCard::new("да", "yes", "da", "Answer");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["f"], "да");
        assert_eq!(json["t"], "yes");
        assert_eq!(json["p"], "da");
        assert_eq!(json["c"], "Answer");
    }

    #[test]
    fn test_flashcard_accepts_long_keys() {
        let json = r#"{"front":"нет","translation":"no","phonetic":"nyet","context":"Refusal"}"#;
        let card: FlashCard = serde_json::from_str(json).unwrap();

        assert_eq!(card, FlashCard::new("нет", "no", "nyet", "Refusal"));
    }
}
