//! Gemini `generateContent` client over blocking HTTP.

use super::{EMPTY_ANSWER, FAILED_ANSWER, Tutor, ask_prompt, deck_prompt, parse_cards};
use crate::error::GenerationError;
use crate::models::FlashCard;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiTutor {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiTutor {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            base_url: API_BASE.to_string(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, body: Value) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::CredentialMissing)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json()?;
        Ok(parsed.text())
    }
}

fn deck_request(topic: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": deck_prompt(topic) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "f": { "type": "STRING", "description": "Russian word/phrase" },
                        "t": { "type": "STRING", "description": "English translation" },
                        "p": { "type": "STRING", "description": "Phonetic pronunciation" },
                        "c": { "type": "STRING", "description": "Example sentence or context" }
                    },
                    "required": ["f", "t", "p", "c"]
                }
            }
        }
    })
}

fn ask_request(question: &str, context_word: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": ask_prompt(question, context_word) }] }],
        "generationConfig": { "temperature": 0.8, "topP": 0.9 }
    })
}

impl Tutor for GeminiTutor {
    fn generate_deck(&self, topic: &str) -> Result<Vec<FlashCard>, GenerationError> {
        tracing::info!(topic, model = %self.model, "generating unit");
        let result = self.generate(deck_request(topic)).and_then(|text| parse_cards(&text));
        match &result {
            Ok(cards) => tracing::info!(topic, cards = cards.len(), "unit generated"),
            Err(e) => tracing::error!(topic, error = %e, "unit generation failed"),
        }
        result
    }

    fn ask(&self, question: &str, context_word: &str) -> String {
        match self.generate(ask_request(question, context_word)) {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => EMPTY_ANSWER.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "assistant request failed");
                FAILED_ANSWER.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_credential_error() {
        let tutor = GeminiTutor::new(None, DEFAULT_MODEL).unwrap();
        assert!(!tutor.has_credential());
        assert!(matches!(
            tutor.generate_deck("Space"),
            Err(GenerationError::CredentialMissing)
        ));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let tutor = GeminiTutor::new(Some("  ".to_string()), DEFAULT_MODEL).unwrap();
        assert!(!tutor.has_credential());
    }

    #[test]
    fn test_ask_without_key_falls_back() {
        let tutor = GeminiTutor::new(None, DEFAULT_MODEL).unwrap();
        assert_eq!(tutor.ask("What does it mean?", "привет"), FAILED_ANSWER);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"[{\"f\":"},{"text":"\"x\"}]"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), r#"[{"f":"x"}]"#);
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_deck_request_requires_all_fields() {
        let body = deck_request("Space");
        let required = &body["generationConfig"]["responseSchema"]["items"]["required"];
        assert_eq!(required.as_array().unwrap().len(), 4);
    }
}
