//! Trainer state shared by every screen: the deck store, the current session
//! snapshot and the flags that keep only one AI request of each kind in
//! flight.
//!
//! Nothing here knows about egui, so the whole flow is testable with an
//! in-memory storage and a seeded RNG.

use crate::clipboard::ClipboardPort;
use crate::database::UnitStorage;
use crate::error::{GenerationError, StoreError, TrainerError};
use crate::export::share;
use crate::models::builtin::DEFAULT_UNIT_ID;
use crate::models::{FlashCard, Session, SessionEvent};
use crate::store::DeckStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use url::Url;

/// Word the assistant talks about when no card is shown.
pub const FALLBACK_WORD: &str = "Russian";

pub struct Trainer<S: UnitStorage> {
    store: DeckStore<S>,
    session: Session,
    rng: StdRng,
    is_generating: bool,
    is_asking: bool,
    last_answer: Option<String>,
}

impl<S: UnitStorage> Trainer<S> {
    pub fn new(store: DeckStore<S>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: DeckStore<S>, rng: StdRng) -> Self {
        let session = Session::new(DEFAULT_UNIT_ID, store.get_cards(DEFAULT_UNIT_ID));
        Self {
            store,
            session,
            rng,
            is_generating: false,
            is_asking: false,
            last_answer: None,
        }
    }

    pub fn store(&self) -> &DeckStore<S> {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let current = std::mem::take(&mut self.session);
        self.session = current.apply(event, &mut self.rng);
    }

    /// Activates `id`. Unknown ids give an empty session.
    pub fn select_unit(&mut self, id: &str) {
        let cards = self.store.get_cards(id);
        tracing::debug!(unit = id, cards = cards.len(), "unit selected");
        self.dispatch(SessionEvent::Select {
            unit_id: id.to_string(),
            cards,
        });
    }

    pub fn next(&mut self) {
        self.dispatch(SessionEvent::Next);
    }

    pub fn previous(&mut self) {
        self.dispatch(SessionEvent::Previous);
    }

    /// Reorders the working copy only; the stored unit keeps its order.
    pub fn shuffle(&mut self) {
        self.dispatch(SessionEvent::Shuffle);
    }

    pub fn toggle_flip(&mut self) {
        self.dispatch(SessionEvent::ToggleFlip);
    }

    pub fn conceal(&mut self) {
        self.dispatch(SessionEvent::Conceal);
    }

    pub fn active_is_custom(&self) -> bool {
        self.store.is_custom(self.session.active_unit_id())
    }

    /// Front of the shown card, for the assistant's context.
    pub fn current_word(&self) -> String {
        self.session
            .current_card()
            .map(|card| card.front.clone())
            .unwrap_or_else(|| FALLBACK_WORD.to_string())
    }

    /// Stores a new unit and switches to it.
    pub fn add_unit(
        &mut self,
        name: &str,
        cards: Vec<FlashCard>,
        icon: Option<String>,
    ) -> Result<String, TrainerError> {
        let id = self.store.add_unit(name, cards, icon)?;
        self.select_unit(&id);
        Ok(id)
    }

    /// Deletes a custom unit. When it was active, the default unit takes over.
    pub fn delete_unit(&mut self, id: &str) -> Result<(), TrainerError> {
        self.store.delete_unit(id)?;
        if self.session.active_unit_id() == id {
            self.select_unit(DEFAULT_UNIT_ID);
        }
        Ok(())
    }

    /// Imports the unit in a share link and switches to it. A bad link
    /// changes nothing.
    pub fn import_share_link(&mut self, link: &str) -> Result<String, TrainerError> {
        let payload = share::decode(&share::payload_from_link(link)?)?;
        let id = self.store.import_shared(payload)?;
        self.select_unit(&id);
        Ok(id)
    }

    /// Copies a share link for custom unit `id` to the clipboard.
    pub fn share_unit(
        &self,
        id: &str,
        base: &Url,
        clipboard: &mut dyn ClipboardPort,
    ) -> Result<Url, TrainerError> {
        let unit = self
            .store
            .get_unit(id)
            .filter(|_| self.store.is_custom(id))
            .ok_or_else(|| StoreError::UnknownUnit(id.to_string()))?;
        let link = share::share_link(base, unit)?;
        clipboard
            .copy_text(link.as_str())
            .map_err(TrainerError::Clipboard)?;
        tracing::info!(unit = id, "share link copied");
        Ok(link)
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Marks a generation as started. Returns the trimmed topic, or `None`
    /// when the topic is blank or a generation is already running.
    pub fn begin_generation(&mut self, topic: &str) -> Option<String> {
        let topic = topic.trim();
        if topic.is_empty() || self.is_generating {
            return None;
        }
        self.is_generating = true;
        Some(topic.to_string())
    }

    /// Applies a finished generation. The flag is cleared whatever happened;
    /// on failure no unit is added and the session is untouched.
    pub fn finish_generation(
        &mut self,
        topic: &str,
        icon: Option<String>,
        result: Result<Vec<FlashCard>, GenerationError>,
    ) -> Result<String, TrainerError> {
        self.is_generating = false;
        let cards = result?;
        if cards.is_empty() {
            return Err(GenerationError::Empty.into());
        }
        self.add_unit(topic, cards, icon)
    }

    pub fn is_asking(&self) -> bool {
        self.is_asking
    }

    /// Marks a question as sent. Returns the trimmed question, or `None`
    /// when it is blank or another question is pending.
    pub fn begin_ask(&mut self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() || self.is_asking {
            return None;
        }
        self.is_asking = true;
        Some(question.to_string())
    }

    pub fn finish_ask(&mut self, answer: String) {
        self.is_asking = false;
        self.last_answer = Some(answer);
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }
}
