pub mod app;
pub mod clipboard;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod gateway;
pub mod models;
pub mod store;
pub mod trainer;

pub use models::{FlashCard, Session, SessionEvent, Unit};
pub use store::DeckStore;
pub use trainer::Trainer;
