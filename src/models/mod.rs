pub mod builtin;
pub mod flashcard;
pub mod library;
pub mod session;
pub mod unit;

pub use flashcard::FlashCard;
pub use session::{Session, SessionEvent};
pub use unit::Unit;
