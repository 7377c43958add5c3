//! Deck store: the starter units plus the user's own, addressable by id.
//!
//! Custom units live in a `BTreeMap` so listing order is the sorted id order.
//! Every mutation is written through the [`UnitStorage`] port before it
//! becomes visible; a failed write leaves the store as it was.

use crate::database::db::CUSTOM_STORE_KEY;
use crate::database::UnitStorage;
use crate::error::StoreError;
use crate::export::share::SharePayload;
use crate::models::builtin::{self, builtin_units};
use crate::models::{FlashCard, Unit};
use chrono::Utc;
use std::collections::BTreeMap;

/// Display number of the first custom unit; starter units take 1 to 10.
const FIRST_CUSTOM_UNIT_NUMBER: usize = 11;

pub struct DeckStore<S: UnitStorage> {
    builtins: Vec<Unit>,
    custom: BTreeMap<String, Unit>,
    storage: S,
}

impl<S: UnitStorage> DeckStore<S> {
    /// Rehydrates custom units from `storage`.
    ///
    /// A missing value means no custom units yet. A value that cannot be read
    /// or parsed is logged and the store starts empty.
    pub fn load(storage: S) -> Self {
        let custom = match storage.read(CUSTOM_STORE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<BTreeMap<String, Unit>>(&json) {
                Ok(units) => units,
                Err(e) => {
                    tracing::error!(error = %e, "failed to parse saved units, starting empty");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to read saved units, starting empty");
                BTreeMap::new()
            }
        };
        tracing::info!(custom_units = custom.len(), "deck store loaded");

        Self {
            builtins: builtin_units(),
            custom,
            storage,
        }
    }

    /// (id, label) of every unit: starter units first, then custom ones by id.
    pub fn list_units(&self) -> Vec<(String, String)> {
        self.builtins
            .iter()
            .map(|unit| (unit.id.clone(), unit.name.clone()))
            .chain(self.custom.keys().map(|id| (id.clone(), self.label(id))))
            .collect()
    }

    pub fn label(&self, id: &str) -> String {
        if let Some(label) = builtin::builtin_label(id) {
            return label.to_string();
        }
        match self.custom.keys().position(|key| key == id) {
            Some(position) => {
                let unit = &self.custom[id];
                format!(
                    "Unit {}: {} {}",
                    FIRST_CUSTOM_UNIT_NUMBER + position,
                    unit.icon_or_default(),
                    unit.name
                )
            }
            None => id.to_string(),
        }
    }

    pub fn get_unit(&self, id: &str) -> Option<&Unit> {
        self.custom
            .get(id)
            .or_else(|| self.builtins.iter().find(|unit| unit.id == id))
    }

    /// Cards of unit `id`, empty when the id is unknown.
    pub fn get_cards(&self, id: &str) -> Vec<FlashCard> {
        self.get_unit(id)
            .map(|unit| unit.cards.clone())
            .unwrap_or_default()
    }

    pub fn is_custom(&self, id: &str) -> bool {
        self.custom.contains_key(id)
    }

    pub fn custom_units(&self) -> impl Iterator<Item = &Unit> {
        self.custom.values()
    }

    /// Creates a custom unit and returns its new id.
    pub fn add_unit(
        &mut self,
        name: &str,
        cards: Vec<FlashCard>,
        icon: Option<String>,
    ) -> Result<String, StoreError> {
        self.insert("custom", name.trim().to_string(), cards, icon)
    }

    /// Stores a unit received through a share link as "Shared: {name}".
    pub fn import_shared(&mut self, payload: SharePayload) -> Result<String, StoreError> {
        let name = format!("Shared: {}", payload.name);
        self.insert("shared", name, payload.cards, payload.icon)
    }

    fn insert(
        &mut self,
        prefix: &str,
        name: String,
        cards: Vec<FlashCard>,
        icon: Option<String>,
    ) -> Result<String, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let id = self.fresh_id(prefix);
        let mut next = self.custom.clone();
        next.insert(
            id.clone(),
            Unit {
                id: id.clone(),
                name,
                icon,
                cards,
            },
        );
        self.commit(next)?;
        tracing::info!(unit = %id, "unit added");
        Ok(id)
    }

    /// Removes a custom unit. Starter units cannot be deleted.
    pub fn delete_unit(&mut self, id: &str) -> Result<(), StoreError> {
        if builtin::is_builtin(id) {
            return Err(StoreError::BuiltInUnit(id.to_string()));
        }
        if !self.custom.contains_key(id) {
            return Err(StoreError::UnknownUnit(id.to_string()));
        }
        let mut next = self.custom.clone();
        next.remove(id);
        self.commit(next)?;
        tracing::info!(unit = %id, "unit deleted");
        Ok(())
    }

    fn commit(&mut self, next: BTreeMap<String, Unit>) -> Result<(), StoreError> {
        let json = serde_json::to_string(&next).map_err(|e| StoreError::Storage(e.into()))?;
        self.storage.write(CUSTOM_STORE_KEY, &json)?;
        self.custom = next;
        Ok(())
    }

    /// `{prefix}_{unix millis}`, bumped by one until it is unused.
    fn fresh_id(&self, prefix: &str) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("{prefix}_{millis}");
            if !self.custom.contains_key(&id) {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryStorage, SqliteStorage};
    use crate::error::StorageError;
    use crate::models::builtin::DEFAULT_UNIT_ID;

    fn sample_cards() -> Vec<FlashCard> {
        vec![
            FlashCard::new("звезда", "star", "zvyez-DA", "Звёзды на небе."),
            FlashCard::new("луна", "moon", "loo-NA", "Полная луна."),
        ]
    }

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl UnitStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn test_builtins_listed_first() {
        let store = DeckStore::load(MemoryStorage::default());
        let units = store.list_units();

        assert_eq!(units.len(), 10);
        assert_eq!(units[0].0, DEFAULT_UNIT_ID);
        assert_eq!(units[0].1, "Unit 1: 🔤 The Alphabet");
    }

    #[test]
    fn test_unknown_id_has_no_cards() {
        let store = DeckStore::load(MemoryStorage::default());
        assert!(store.get_cards("nope").is_empty());
        assert!(store.get_unit("nope").is_none());
    }

    #[test]
    fn test_add_unit_is_listed_and_persisted() {
        let mut store = DeckStore::load(MemoryStorage::default());
        let id = store
            .add_unit("Space", sample_cards(), Some("🌲".to_string()))
            .unwrap();

        assert!(id.starts_with("custom_"));
        assert!(store.is_custom(&id));
        assert_eq!(store.get_cards(&id), sample_cards());
        assert_eq!(store.label(&id), "Unit 11: 🌲 Space");

        let saved = store.storage.read(CUSTOM_STORE_KEY).unwrap().unwrap();
        let parsed: BTreeMap<String, Unit> = serde_json::from_str(&saved).unwrap();
        assert_eq!(parsed[&id].name, "Space");
    }

    #[test]
    fn test_ids_are_unique_within_one_millisecond() {
        let mut store = DeckStore::load(MemoryStorage::default());
        let a = store.add_unit("A", Vec::new(), None).unwrap();
        let b = store.add_unit("B", Vec::new(), None).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.custom_units().count(), 2);
    }

    #[test]
    fn test_custom_labels_follow_sorted_ids() {
        let mut store = DeckStore::load(MemoryStorage::default());
        let first = store.add_unit("First", Vec::new(), None).unwrap();
        let second = store.add_unit("Second", Vec::new(), None).unwrap();

        assert_eq!(store.label(&first), "Unit 11: 📂 First");
        assert_eq!(store.label(&second), "Unit 12: 📂 Second");
        let listed = store.list_units();
        assert_eq!(listed[10].0, first);
        assert_eq!(listed[11].0, second);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = DeckStore::load(MemoryStorage::default());
        assert!(matches!(
            store.add_unit("   ", sample_cards(), None),
            Err(StoreError::EmptyName)
        ));
    }

    #[test]
    fn test_import_shared_prefixes_name() {
        let mut store = DeckStore::load(MemoryStorage::default());
        let id = store
            .import_shared(SharePayload {
                name: "Pets".to_string(),
                cards: sample_cards(),
                icon: None,
            })
            .unwrap();

        assert!(id.starts_with("shared_"));
        assert_eq!(store.get_unit(&id).unwrap().name, "Shared: Pets");
    }

    #[test]
    fn test_delete_custom_unit() {
        let mut store = DeckStore::load(MemoryStorage::default());
        let id = store.add_unit("Gone", sample_cards(), None).unwrap();

        store.delete_unit(&id).unwrap();
        assert!(!store.is_custom(&id));
        assert!(store.get_cards(&id).is_empty());
    }

    #[test]
    fn test_delete_builtin_fails() {
        let mut store = DeckStore::load(MemoryStorage::default());
        assert!(matches!(
            store.delete_unit("alphabet"),
            Err(StoreError::BuiltInUnit(_))
        ));
        assert!(!store.get_cards("alphabet").is_empty());
    }

    #[test]
    fn test_delete_unknown_fails() {
        let mut store = DeckStore::load(MemoryStorage::default());
        assert!(matches!(
            store.delete_unit("custom_0"),
            Err(StoreError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = MemoryStorage::with_value(CUSTOM_STORE_KEY, "{ not json");
        let store = DeckStore::load(storage);
        assert_eq!(store.custom_units().count(), 0);
        assert_eq!(store.list_units().len(), 10);
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let mut store = DeckStore::load(ReadOnlyStorage);
        let result = store.add_unit("Space", sample_cards(), None);

        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.custom_units().count(), 0);
    }

    #[test]
    fn test_reload_from_sqlite() {
        let path = std::env::temp_dir().join("babushka_test_store_reload.sqlite3");
        let _ = std::fs::remove_file(&path);

        let id = {
            let mut store = DeckStore::load(SqliteStorage::open(&path).unwrap());
            store.add_unit("Persisted", sample_cards(), None).unwrap()
        };

        let store = DeckStore::load(SqliteStorage::open(&path).unwrap());
        assert_eq!(store.get_unit(&id).unwrap().name, "Persisted");
        assert_eq!(store.get_cards(&id), sample_cards());

        drop(store);
        let _ = std::fs::remove_file(&path);
    }
}
