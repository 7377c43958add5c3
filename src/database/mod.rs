pub mod db;

pub use db::{MemoryStorage, SqliteStorage, UnitStorage};
