//! JSON import/export module for units.
//! Saves a unit as `{name, icon, cards}` and loads the same shape back.

use super::share::SharePayload;
use crate::error::ExportError;
use crate::models::Unit;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a unit to a JSON file at the specified path.
pub fn export_json_to_path(unit: &Unit, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let json_string = serde_json::to_string_pretty(&SharePayload::from(unit))?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    tracing::info!(unit = %unit.id, path = %path.as_ref().display(), "unit exported");
    Ok(())
}

/// Imports a unit description from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<SharePayload, ExportError> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let payload: SharePayload = serde_json::from_str(&contents)?;

    tracing::info!(name = %payload.name, path = %path.as_ref().display(), "unit imported");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlashCard;
    use std::fs;

    fn create_test_unit() -> Unit {
        Unit {
            id: "custom_1".to_string(),
            name: "Test Unit".to_string(),
            icon: Some("🥘".to_string()),
            cards: vec![
                FlashCard::new("привет", "hello", "pree-VYET", "Greeting"),
                FlashCard::new("пока", "bye", "pa-KA", "Farewell"),
            ],
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_export_json_to_path() {
        let unit = create_test_unit();
        let test_file = temp_path("babushka_test_export.json");

        let result = export_json_to_path(&unit, &test_file);
        assert!(result.is_ok());

        assert!(fs::metadata(&test_file).is_ok(), "File should exist");

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "name": "Import Test Unit",
  "cards": [
    {
      "f": "дом",
      "t": "house",
      "p": "dom",
      "c": "Мой дом. My house."
    }
  ]
}"#;

        let test_file = temp_path("babushka_test_import.json");
        fs::write(&test_file, json_content).unwrap();

        let result = import_json(&test_file);
        assert!(result.is_ok());

        let payload = result.unwrap();
        assert_eq!(payload.name, "Import Test Unit");
        assert_eq!(payload.icon, None);
        assert_eq!(payload.cards.len(), 1);
        assert_eq!(payload.cards[0].front, "дом");
        assert_eq!(payload.cards[0].translation, "house");

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let original = create_test_unit();
        let test_file = temp_path("babushka_test_roundtrip.json");

        export_json_to_path(&original, &test_file).unwrap();
        let imported = import_json(&test_file).unwrap();

        assert_eq!(imported.name, original.name);
        assert_eq!(imported.icon, original.icon);
        assert_eq!(imported.cards, original.cards);

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json(temp_path("babushka_nonexistent_xyz123.json"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let test_file = temp_path("babushka_test_invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_json(&test_file);
        assert!(matches!(result, Err(ExportError::Json(_))));

        let _ = fs::remove_file(&test_file);
    }
}
