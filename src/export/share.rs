//! Share links: a unit packed into the `deck` query parameter.
//!
//! The payload is base64 of the JSON object `{name, cards, icon}`. Encoding
//! uses the URL-safe alphabet without padding; decoding also accepts the
//! standard alphabet and padding, and spaces that a query parser made out of
//! `+`. A payload is accepted only when `name` is a non-empty string, `cards`
//! is a list, and every card has its four text fields.

use crate::error::ShareDecodeError;
use crate::models::{FlashCard, Unit};
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Query parameter carrying the payload.
pub const SHARE_PARAM: &str = "deck";

/// What travels inside a share link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub name: String,
    pub cards: Vec<FlashCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<&Unit> for SharePayload {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name.clone(),
            cards: unit.cards.clone(),
            icon: unit.icon.clone(),
        }
    }
}

pub fn encode(unit: &Unit) -> Result<String, serde_json::Error> {
    encode_payload(&SharePayload::from(unit))
}

pub fn encode_payload(payload: &SharePayload) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(payload)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode(payload: &str) -> Result<SharePayload, ShareDecodeError> {
    let bytes = decode_base64(payload)?;
    let value: Value = serde_json::from_slice(&bytes)?;

    let name = value
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(ShareDecodeError::MissingName)?;
    let raw_cards = value
        .get("cards")
        .and_then(Value::as_array)
        .ok_or(ShareDecodeError::MissingCards)?;

    let cards = raw_cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            FlashCard::deserialize(card).map_err(|_| ShareDecodeError::InvalidCard(i))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let icon = value
        .get("icon")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(SharePayload {
        name: name.to_string(),
        cards,
        icon,
    })
}

fn decode_base64(payload: &str) -> Result<Vec<u8>, ShareDecodeError> {
    let cleaned: String = payload
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    match URL_SAFE_NO_PAD.decode(cleaned.as_bytes()) {
        Ok(bytes) => Ok(bytes),
        Err(_) => Ok(STANDARD_NO_PAD.decode(cleaned.as_bytes())?),
    }
}

/// Builds `base?deck=<payload>`, keeping any query pairs already on `base`.
pub fn share_link(base: &Url, unit: &Unit) -> Result<Url, serde_json::Error> {
    let payload = encode(unit)?;
    let mut link = base.clone();
    link.query_pairs_mut().append_pair(SHARE_PARAM, &payload);
    Ok(link)
}

/// Pulls the payload out of pasted text: a full link, a bare `?deck=` query,
/// or the payload itself.
pub fn payload_from_link(text: &str) -> Result<String, ShareDecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ShareDecodeError::NoPayload);
    }

    if let Ok(link) = Url::parse(text) {
        return link
            .query_pairs()
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or(ShareDecodeError::NoPayload);
    }

    if let Some(query) = text.split_once('?').map(|(_, q)| q).or_else(|| {
        text.starts_with("deck=").then_some(text)
    }) {
        return url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or(ShareDecodeError::NoPayload);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn unit(name: &str, icon: Option<&str>) -> Unit {
        Unit {
            id: "custom_1".to_string(),
            name: name.to_string(),
            icon: icon.map(str::to_string),
            cards: vec![
                FlashCard::new("кошка", "cat", "KOSH-ka", "Кошка спит. The cat sleeps."),
                FlashCard::new("собака", "dog", "sa-BA-ka", "Dog's best friend"),
            ],
        }
    }

    #[test]
    fn test_roundtrip_cyrillic_with_icon() {
        let original = unit("Домашние животные", Some("🐾"));
        let decoded = decode(&encode(&original).unwrap()).unwrap();

        assert_eq!(decoded.name, original.name);
        assert_eq!(decoded.cards, original.cards);
        assert_eq!(decoded.icon, original.icon);
    }

    #[test]
    fn test_roundtrip_ascii_without_icon() {
        let original = unit("Pets", None);
        let decoded = decode(&encode(&original).unwrap()).unwrap();

        assert_eq!(decoded, SharePayload::from(&original));
    }

    #[test]
    fn test_encoded_payload_is_url_safe() {
        let encoded = encode(&unit("Ёжик? / + & =", Some("🦔"))).unwrap();
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_accepts_standard_alphabet_with_padding() {
        let json = r#"{"name":"Old link","cards":[{"f":"да","t":"yes","p":"da","c":""}]}"#;
        let decoded = decode(&STANDARD.encode(json)).unwrap();

        assert_eq!(decoded.name, "Old link");
        assert_eq!(decoded.cards.len(), 1);
        assert_eq!(decoded.icon, None);
    }

    #[test]
    fn test_accepts_plus_turned_into_space() {
        // `ёё` and `?>` put '+' into the standard alphabet.
        let json = r#"{"name":"Ёжик ёё?>","cards":[{"f":"ёё","t":"?>?>","p":"","c":""}]}"#;
        let standard = STANDARD.encode(json);
        assert!(standard.contains('+'));

        let mangled = standard.replace('+', " ");
        let decoded = decode(&mangled).unwrap();
        assert_eq!(decoded.name, "Ёжик ёё?>");

        let link = format!("https://x.test/?deck={standard}");
        let payload = payload_from_link(&link).unwrap();
        assert!(payload.contains(' '));
        assert_eq!(decode(&payload).unwrap().cards[0].translation, "?>?>");
    }

    #[test]
    fn test_rejects_missing_cards() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"name":"No cards"}"#);
        assert!(matches!(
            decode(&payload),
            Err(ShareDecodeError::MissingCards)
        ));
    }

    #[test]
    fn test_rejects_cards_that_are_not_a_list() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"name":"Bad","cards":"nope"}"#);
        assert!(matches!(
            decode(&payload),
            Err(ShareDecodeError::MissingCards)
        ));
    }

    #[test]
    fn test_rejects_non_string_name() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"name":42,"cards":[]}"#);
        assert!(matches!(
            decode(&payload),
            Err(ShareDecodeError::MissingName)
        ));
    }

    #[test]
    fn test_rejects_malformed_card() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"name":"Bad","cards":[{"f":"да"}]}"#);
        assert!(matches!(
            decode(&payload),
            Err(ShareDecodeError::InvalidCard(0))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode("%%% not base64 %%%").is_err());
        assert!(matches!(
            decode(&URL_SAFE_NO_PAD.encode("not json")),
            Err(ShareDecodeError::Json(_))
        ));
    }

    #[test]
    fn test_share_link_roundtrip_through_url() {
        let base = Url::parse("babushka://import").unwrap();
        let original = unit("Питомцы", None);
        let link = share_link(&base, &original).unwrap();

        let payload = payload_from_link(link.as_str()).unwrap();
        assert_eq!(decode(&payload).unwrap().name, "Питомцы");
    }

    #[test]
    fn test_payload_from_bare_inputs() {
        assert_eq!(payload_from_link("  abc  ").unwrap(), "abc");
        assert_eq!(payload_from_link("?deck=xyz").unwrap(), "xyz");
        assert_eq!(payload_from_link("deck=xyz").unwrap(), "xyz");
        assert!(matches!(
            payload_from_link("https://example.com/?other=1"),
            Err(ShareDecodeError::NoPayload)
        ));
        assert!(matches!(
            payload_from_link(""),
            Err(ShareDecodeError::NoPayload)
        ));
    }
}
