//! Route handlers. `pages` render HTML through the layout; `api` returns JSON.

pub mod api;
pub mod pages;

use marvel_core::{CatalogError, Character, CharacterId, CharacterSource, SortOptions};

/// Loader for `/characters`: lists the catalog in the requested order.
pub fn load_characters(source: &dyn CharacterSource, options: SortOptions) -> Vec<Character> {
    tracing::debug!(sort = options.sort.as_str(), order = options.order.as_str(), "Listing characters");
    source.list_characters(&options)
}

/// Loader for `/characters/:id`. An absent result (malformed store) is reported as not found.
pub fn load_character(source: &dyn CharacterSource, id: &str) -> Result<Character, CatalogError> {
    let id = CharacterId::from(id);
    match source.get_character(&id)? {
        Some(found) => Ok(found),
        None => Err(CatalogError::NotFound { id: id.as_key() }),
    }
}
