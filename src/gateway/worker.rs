//! Runs tutor calls on background threads and hands results back to the UI
//! thread through a channel that is drained once per frame.

use super::Tutor;
use crate::error::GenerationError;
use crate::models::FlashCard;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::thread;

pub enum TutorEvent {
    DeckGenerated {
        topic: String,
        icon: Option<String>,
        result: Result<Vec<FlashCard>, GenerationError>,
    },
    Answered {
        answer: String,
    },
}

pub struct TutorWorker {
    tutor: Arc<dyn Tutor>,
    tx: Sender<TutorEvent>,
    rx: Receiver<TutorEvent>,
}

impl TutorWorker {
    pub fn new(tutor: Arc<dyn Tutor>) -> Self {
        let (tx, rx) = unbounded();
        Self { tutor, tx, rx }
    }

    pub fn request_deck(&self, topic: String, icon: Option<String>) {
        let tutor = Arc::clone(&self.tutor);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = tutor.generate_deck(&topic);
            // The receiver only goes away when the app is closing.
            let _ = tx.send(TutorEvent::DeckGenerated {
                topic,
                icon,
                result,
            });
        });
    }

    pub fn request_answer(&self, question: String, context_word: String) {
        let tutor = Arc::clone(&self.tutor);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let answer = tutor.ask(&question, &context_word);
            let _ = tx.send(TutorEvent::Answered { answer });
        });
    }

    /// Finished calls since the last poll, without blocking.
    pub fn poll(&self) -> Vec<TutorEvent> {
        self.rx.try_iter().collect()
    }
}
