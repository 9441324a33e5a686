//! snipvault - snippet library manager
//!
//! Stores titled, tagged code snippets, filters them by text and tag, and
//! moves whole libraries in and out as JSON. The library and the active
//! filter are persisted through a [`store::KeyValueStore`] handed in by the
//! caller.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;

pub use app::App;
pub use models::{MAX_SNIPPETS, Snippet};
pub use search::{FilterState, TagFilter, filter_snippets};
