//! Read-only character store, loaded once at startup.
//!
//! The bundled dataset is compiled in; a JSON file can replace it through
//! [`CoreConfig::dataset_path`](crate::CoreConfig).

use super::character::{Character, CharacterId};
use super::sort::{sort_characters, SortOptions};
use super::{CatalogError, CharacterSource};
use crate::shared::CoreConfig;
use serde_json::Value;
use std::fmt;
use std::path::Path;

const BUNDLED_DATASET: &str = include_str!("../../data/characters.json");

/// Failure to load a dataset. Shape problems are not errors: a non-array root loads
/// as an empty catalog.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dataset unreadable: {}", e),
            Self::Parse(e) => write!(f, "dataset is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Immutable ordered sequence of character records.
#[derive(Debug, Clone)]
pub struct CharacterStore {
    /// `None` when the dataset root was not an array.
    records: Option<Vec<Character>>,
}

impl CharacterStore {
    /// Store over the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Loads the dataset at `path`.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json_str(&raw)?;
        tracing::info!(
            target: "marvel::store",
            path = %path.as_ref().display(),
            records = store.len(),
            "Dataset loaded"
        );
        Ok(store)
    }

    /// Configured dataset if any, else the bundled one.
    pub fn load(config: &CoreConfig) -> Result<Self, StoreError> {
        match config.resolved_dataset_path() {
            Some(path) => Self::open_path(path),
            None => Self::bundled(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(value))
    }

    /// Array roots become records; any other root is kept as a malformed (empty) store.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::from_records(items.into_iter().map(Character::from_value).collect()),
            other => {
                tracing::warn!(
                    target: "marvel::store",
                    root = %json_kind(&other),
                    "Dataset root is not an array; serving an empty catalog"
                );
                Self { records: None }
            }
        }
    }

    pub fn from_records(records: Vec<Character>) -> Self {
        Self { records: Some(records) }
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[Character] {
        self.records.as_deref().unwrap_or(&[])
    }

    pub fn is_sequence(&self) -> bool {
        self.records.is_some()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl CharacterSource for CharacterStore {
    fn list_characters(&self, options: &SortOptions) -> Vec<Character> {
        sort_characters(self.records(), options)
    }

    fn get_character(&self, id: &CharacterId) -> Result<Option<Character>, CatalogError> {
        let Some(records) = self.records.as_deref() else {
            return Ok(None);
        };
        match records.iter().find(|c| c.matches(id)) {
            Some(found) => Ok(Some(found.clone())),
            None => {
                tracing::debug!(target: "marvel::store", id = %id, "Character not found");
                Err(CatalogError::NotFound { id: id.as_key() })
            }
        }
    }
}
