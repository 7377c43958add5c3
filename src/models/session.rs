//! Viewing session over one unit: which card is shown and whether it is flipped.
//!
//! The session is an immutable value. Every user event goes through
//! [`Session::apply`], which consumes the old snapshot and returns the next one,
//! so the rendering layer never mutates navigation state directly.
//!
//! The working copy of the cards is independent of the unit it came from:
//! shuffling reorders the copy and never the stored unit.

use super::FlashCard;
use rand::Rng;

/// Events that move a session from one snapshot to the next.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Activate a unit with a snapshot of its cards.
    Select { unit_id: String, cards: Vec<FlashCard> },
    Next,
    Previous,
    Shuffle,
    ToggleFlip,
    /// Show the front side without moving.
    Conceal,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    active_unit_id: String,
    working_cards: Vec<FlashCard>,
    index: usize,
    flipped: bool,
}

impl Session {
    pub fn new(unit_id: impl Into<String>, cards: Vec<FlashCard>) -> Self {
        Self {
            active_unit_id: unit_id.into(),
            working_cards: cards,
            index: 0,
            flipped: false,
        }
    }

    /// Returns the snapshot that follows `event`.
    pub fn apply<R: Rng + ?Sized>(self, event: SessionEvent, rng: &mut R) -> Self {
        match event {
            SessionEvent::Select { unit_id, cards } => Self::new(unit_id, cards),
            SessionEvent::Next => self.step(1),
            SessionEvent::Previous => self.step(-1),
            SessionEvent::Shuffle => self.shuffled(rng),
            SessionEvent::ToggleFlip => {
                if self.working_cards.is_empty() {
                    self
                } else {
                    Self {
                        flipped: !self.flipped,
                        ..self
                    }
                }
            }
            SessionEvent::Conceal => Self {
                flipped: false,
                ..self
            },
        }
    }

    fn step(self, delta: isize) -> Self {
        let len = self.working_cards.len();
        let index = if len <= 1 {
            self.index
        } else {
            (self.index as isize + delta).rem_euclid(len as isize) as usize
        };
        Self {
            index,
            flipped: false,
            ..self
        }
    }

    fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        // Fisher-Yates shuffle
        for i in (1..self.working_cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.working_cards.swap(i, j);
        }
        self.index = 0;
        self.flipped = false;
        self
    }

    pub fn active_unit_id(&self) -> &str {
        &self.active_unit_id
    }

    pub fn cards(&self) -> &[FlashCard] {
        &self.working_cards
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn len(&self) -> usize {
        self.working_cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_cards.is_empty()
    }

    /// Navigation and shuffling only make sense with more than one card.
    pub fn can_navigate(&self) -> bool {
        self.working_cards.len() > 1
    }

    pub fn current_card(&self) -> Option<&FlashCard> {
        self.working_cards.get(self.index)
    }

    /// One-based position, e.g. "3 / 20". An empty deck reads "0 / 0".
    pub fn position_label(&self) -> String {
        if self.working_cards.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.working_cards.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cards(n: usize) -> Vec<FlashCard> {
        (0..n)
            .map(|i| FlashCard::new(format!("слово {i}"), format!("word {i}"), "", ""))
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut rng = rng();
        let mut session = Session::new("basics", cards(5));
        for _ in 0..5 {
            session = session.apply(SessionEvent::Next, &mut rng);
        }
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut rng = rng();
        let session = Session::new("basics", cards(4)).apply(SessionEvent::Previous, &mut rng);
        assert_eq!(session.index(), 3);
        assert_eq!(session.position_label(), "4 / 4");
    }

    #[test]
    fn test_navigation_clears_flip() {
        let mut rng = rng();
        let session = Session::new("basics", cards(3))
            .apply(SessionEvent::ToggleFlip, &mut rng)
            .apply(SessionEvent::Next, &mut rng);
        assert!(!session.is_flipped());
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_single_card_does_not_move() {
        let mut rng = rng();
        let session = Session::new("basics", cards(1))
            .apply(SessionEvent::Next, &mut rng)
            .apply(SessionEvent::Previous, &mut rng);
        assert_eq!(session.index(), 0);
        assert!(!session.can_navigate());
    }

    #[test]
    fn test_select_resets_position() {
        let mut rng = rng();
        let session = Session::new("basics", cards(3))
            .apply(SessionEvent::Next, &mut rng)
            .apply(SessionEvent::ToggleFlip, &mut rng)
            .apply(
                SessionEvent::Select {
                    unit_id: "numbers".to_string(),
                    cards: cards(2),
                },
                &mut rng,
            );
        assert_eq!(session.active_unit_id(), "numbers");
        assert_eq!(session.index(), 0);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_empty_session_is_safe() {
        let mut rng = rng();
        let session = Session::new("missing", Vec::new())
            .apply(SessionEvent::Next, &mut rng)
            .apply(SessionEvent::ToggleFlip, &mut rng)
            .apply(SessionEvent::Shuffle, &mut rng);
        assert_eq!(session.index(), 0);
        assert!(session.current_card().is_none());
        assert!(!session.is_flipped());
        assert_eq!(session.position_label(), "0 / 0");
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = rng();
        let original = cards(20);
        let session = Session::new("basics", original.clone())
            .apply(SessionEvent::Next, &mut rng)
            .apply(SessionEvent::ToggleFlip, &mut rng)
            .apply(SessionEvent::Shuffle, &mut rng);

        assert_eq!(session.index(), 0);
        assert!(!session.is_flipped());

        let mut shuffled = session.cards().to_vec();
        assert_eq!(shuffled.len(), original.len());
        assert_ne!(shuffled, original);

        let mut sorted = original.clone();
        sorted.sort_by(|a, b| a.front.cmp(&b.front));
        shuffled.sort_by(|a, b| a.front.cmp(&b.front));
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_conceal_keeps_position() {
        let mut rng = rng();
        let session = Session::new("basics", cards(3))
            .apply(SessionEvent::Next, &mut rng)
            .apply(SessionEvent::ToggleFlip, &mut rng)
            .apply(SessionEvent::Conceal, &mut rng);
        assert_eq!(session.index(), 1);
        assert!(!session.is_flipped());
    }
}
