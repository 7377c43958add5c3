//! Unit is a named set of flashcards
use super::FlashCard;
use serde::{Deserialize, Serialize};

/// Icon shown next to custom units that were created without one.
pub const DEFAULT_UNIT_ICON: &str = "📂";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cards: Vec<FlashCard>,
}

impl Unit {
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_UNIT_ICON)
    }
}
