//! Character catalog: record model, store, and the read-only accessor over it.
//!
//! | Operation          | Result                                                     |
//! |--------------------|------------------------------------------------------------|
//! | `list_characters`  | sorted copy of every record; empty for a malformed store   |
//! | `get_character`    | first record answering to the id; `NotFound` when absent   |

mod character;
mod sort;
mod store;

pub use character::{Attribute, Capacities, Character, CharacterId, NO_DESCRIPTION};
pub use sort::{sort_characters, SortField, SortOptions, SortOrder};
pub use store::{CharacterStore, StoreError};

use std::fmt;

/// Lookup failures surfaced to page loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record answers to `id`.
    NotFound { id: String },
}

impl CatalogError {
    /// HTTP status the gateway should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "character not found: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only query interface over a set of characters.
pub trait CharacterSource: Send + Sync {
    /// Every record, sorted per `options`. Never fails and never reorders the source.
    fn list_characters(&self, options: &SortOptions) -> Vec<Character>;

    /// The first record matching `id`. `Ok(None)` only when the source is not a sequence.
    fn get_character(&self, id: &CharacterId) -> Result<Option<Character>, CatalogError>;
}
