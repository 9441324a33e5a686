//! Loading and saving of the snippet library and the filter state.
//!
//! Every function takes the store handle explicitly. The `try_*` functions
//! report why a value could not be used; the plain ones never fail and
//! substitute the documented fallback instead, logging the reason.

use serde_json::Value;

use crate::error::StorageError;
use crate::models::{MAX_SNIPPETS, Snippet, import_snippets};
use crate::search::{FilterState, TagFilter};
use crate::store::KeyValueStore;

pub const SNIPPETS_KEY: &str = "snipvault:snippets";
pub const FILTERS_KEY: &str = "snipvault:filters";

/// Reads the stored library.
///
/// An array with no valid record is reported as [`StorageError::Empty`], so
/// a stored `[]` is treated the same as a missing value.
pub fn try_load_snippets<S: KeyValueStore>(store: &S) -> Result<Vec<Snippet>, StorageError> {
    let raw = store
        .get(SNIPPETS_KEY)?
        .ok_or(StorageError::Missing(SNIPPETS_KEY))?;

    let snippets = import_snippets(&raw)?;
    if snippets.is_empty() {
        return Err(StorageError::Empty);
    }
    Ok(snippets)
}

/// Reads the stored library, or returns `fallback` when there is nothing
/// usable under the key.
pub fn load_snippets<S: KeyValueStore>(store: &S, fallback: Vec<Snippet>) -> Vec<Snippet> {
    match try_load_snippets(store) {
        Ok(snippets) => {
            log::debug!("Loaded {} snippets", snippets.len());
            snippets
        }
        Err(StorageError::Missing(_)) => fallback,
        Err(e) => {
            log::warn!("Using default snippets: {}", e);
            fallback
        }
    }
}

pub fn try_save_snippets<S: KeyValueStore>(
    store: &S,
    snippets: &[Snippet],
) -> Result<(), StorageError> {
    let capped = &snippets[..snippets.len().min(MAX_SNIPPETS)];
    let json = serde_json::to_string(capped)?;
    store.set(SNIPPETS_KEY, &json)?;
    Ok(())
}

/// Overwrites the stored library with the first [`MAX_SNIPPETS`] entries.
pub fn save_snippets<S: KeyValueStore>(store: &S, snippets: &[Snippet]) {
    if let Err(e) = try_save_snippets(store, snippets) {
        log::error!("Failed to save snippets: {}", e);
    }
}

/// Reads the stored filter state field by field.
///
/// A field that is missing or not a string falls back to its own default;
/// a value that is not a JSON object yields the default state.
pub fn try_load_filter_state<S: KeyValueStore>(store: &S) -> Result<FilterState, StorageError> {
    let raw = store
        .get(FILTERS_KEY)?
        .ok_or(StorageError::Missing(FILTERS_KEY))?;
    let value: Value = serde_json::from_str(&raw)?;

    let field = |name: &str| value.get(name).and_then(Value::as_str);

    Ok(FilterState {
        query: field("query").map(str::to_string).unwrap_or_default(),
        tag_filter: field("tagFilter").map(TagFilter::from).unwrap_or_default(),
    })
}

pub fn load_filter_state<S: KeyValueStore>(store: &S) -> FilterState {
    match try_load_filter_state(store) {
        Ok(state) => state,
        Err(StorageError::Missing(_)) => FilterState::default(),
        Err(e) => {
            log::warn!("Using default filters: {}", e);
            FilterState::default()
        }
    }
}

pub fn try_save_filter_state<S: KeyValueStore>(
    store: &S,
    state: &FilterState,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(state)?;
    store.set(FILTERS_KEY, &json)?;
    Ok(())
}

pub fn save_filter_state<S: KeyValueStore>(store: &S, state: &FilterState) {
    if let Err(e) = try_save_filter_state(store, state) {
        log::error!("Failed to save filters: {}", e);
    }
}
