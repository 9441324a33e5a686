use std::path::Path;

use once_cell::sync::Lazy;

use crate::clipboard::ClipboardError;
use crate::models::{
    ImportError, Snippet, SnippetError, available_tags, export_snippets, export_to_file,
    import_snippets, load_filter_state, load_snippets, save_filter_state, save_snippets,
};
use crate::search::{FilterState, TagFilter, filter_snippets};
use crate::store::KeyValueStore;

/// Library shown on first start, or when the stored library is unusable.
static DEFAULT_SNIPPETS: Lazy<Vec<Snippet>> = Lazy::new(|| {
    vec![
        Snippet {
            id: "s1".to_string(),
            title: "Fetch JSON".to_string(),
            code: "const response = await fetch(url);\nconst data = await response.json();"
                .to_string(),
            tags: vec!["api".to_string(), "javascript".to_string()],
        },
        Snippet {
            id: "s2".to_string(),
            title: "Fastify health route".to_string(),
            code: "app.get('/health', async () => ({ status: 'ok' }));".to_string(),
            tags: vec!["node".to_string(), "fastify".to_string()],
        },
    ]
});

pub fn default_snippets() -> Vec<Snippet> {
    DEFAULT_SNIPPETS.clone()
}

/// Session state.
///
/// Owns the snippet library and the filter state for the lifetime of a
/// session and writes both back through the store after every change.
#[derive(Debug)]
pub struct App<S: KeyValueStore> {
    store: S,
    pub snippets: Vec<Snippet>,
    pub filters: FilterState,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    /// Loads the session from `store`, starting from the default library
    /// when nothing usable is stored.
    pub fn new(store: S) -> Self {
        Self::load(store, default_snippets())
    }

    pub fn load(store: S, fallback: Vec<Snippet>) -> Self {
        let snippets = load_snippets(&store, fallback);
        let filters = load_filter_state(&store);

        Self {
            store,
            snippets,
            filters,
            error_message: None,
            success_message: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snippets passing the current query and tag filter
    pub fn visible(&self) -> Vec<&Snippet> {
        filter_snippets(&self.snippets, &self.filters.query, &self.filters.tag_filter)
    }

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.snippets)
    }

    pub fn find(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// Creates a snippet from form input and puts it at the top of the
    /// library.
    pub fn add_snippet(
        &mut self,
        title: &str,
        code: &str,
        tags: &str,
    ) -> Result<&Snippet, SnippetError> {
        let snippet = match Snippet::new(title, code, tags) {
            Ok(snippet) => snippet,
            Err(e) => {
                self.set_error_message("Title and code are required.".to_string());
                return Err(e);
            }
        };

        log::debug!("Adding snippet {}", snippet.id);
        self.snippets.insert(0, snippet);
        self.save_snippets();
        self.set_success_message("Snippet added.".to_string());

        Ok(&self.snippets[0])
    }

    pub fn remove_snippet(&mut self, id: &str) -> Option<Snippet> {
        let index = self.snippets.iter().position(|s| s.id == id);
        let Some(index) = index else {
            self.set_error_message(format!("No snippet with id {}", id));
            return None;
        };

        let removed = self.snippets.remove(index);
        self.save_snippets();
        self.set_success_message(format!("Removed: {}", removed.title));
        Some(removed)
    }

    pub fn set_query(&mut self, query: &str) {
        self.filters.query = query.to_string();
        self.save_filters();
    }

    pub fn set_tag_filter(&mut self, tag_filter: TagFilter) {
        self.filters.tag_filter = tag_filter;
        self.save_filters();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.save_filters();
    }

    /// Serializes the whole library for download.
    pub fn export_json(&mut self) -> serde_json::Result<String> {
        let json = export_snippets(&self.snippets)?;
        self.set_success_message("Exported snippets to JSON.".to_string());
        Ok(json)
    }

    pub fn export_to(&mut self, path: &Path) -> anyhow::Result<()> {
        export_to_file(&self.snippets, path)?;
        self.set_success_message("Exported snippets to JSON.".to_string());
        Ok(())
    }

    /// Replaces the library with the snippets in `text`.
    ///
    /// On failure the library is left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        match import_snippets(text) {
            Ok(snippets) => {
                let count = snippets.len();
                self.snippets = snippets;
                self.save_snippets();
                self.set_success_message(format!("Imported {} snippets.", count));
                Ok(count)
            }
            Err(e) => {
                self.set_error_message(format!("Import failed: {}", e));
                Err(e)
            }
        }
    }

    /// Hands the code of snippet `id` to `write`, normally
    /// [`crate::clipboard::copy_to_clipboard`].
    pub fn copy_snippet<F>(&mut self, id: &str, write: F) -> bool
    where
        F: FnOnce(&str) -> Result<(), ClipboardError>,
    {
        let Some(snippet) = self.find(id) else {
            self.set_error_message(format!("No snippet with id {}", id));
            return false;
        };
        let title = snippet.title.clone();

        match write(&snippet.code) {
            Ok(()) => {
                self.set_success_message(format!("Copied: {}", title));
                true
            }
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                self.set_error_message("Clipboard not available.".to_string());
                false
            }
        }
    }

    fn save_snippets(&self) {
        save_snippets(&self.store, &self.snippets);
    }

    fn save_filters(&self) {
        save_filter_state(&self.store, &self.filters);
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::storage::{FILTERS_KEY, SNIPPETS_KEY};
    use crate::store::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new())
    }

    #[test]
    fn test_new_uses_default_library() {
        let app = app();
        assert_eq!(app.snippets, default_snippets());
        assert_eq!(app.filters, FilterState::default());
    }

    #[test]
    fn test_add_snippet_prepends_and_persists() {
        let mut app = app();
        let id = app
            .add_snippet("Retry fetch", "for (let i=0;i<3;i++) {}", "api,retry")
            .unwrap()
            .id
            .clone();

        assert_eq!(app.snippets[0].id, id);
        assert_eq!(app.snippets.len(), 3);
        assert_eq!(app.success_message.as_deref(), Some("Snippet added."));

        let reloaded = App::load(app.store(), Vec::new());
        assert_eq!(reloaded.snippets[0].title, "Retry fetch");
        assert_eq!(reloaded.snippets[0].tags, vec!["api", "retry"]);
    }

    #[test]
    fn test_add_snippet_requires_fields() {
        let mut app = app();
        assert_eq!(app.add_snippet("", "code", ""), Err(SnippetError::EmptyTitle));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Title and code are required.")
        );
        assert_eq!(app.snippets.len(), 2);
        assert!(app.store().raw(SNIPPETS_KEY).is_none());
    }

    #[test]
    fn test_filters_are_persisted() {
        let mut app = app();
        app.set_query("fetch");
        app.set_tag_filter(TagFilter::from("api"));

        let reloaded = App::load(app.store(), Vec::new());
        assert_eq!(reloaded.filters.query, "fetch");
        assert_eq!(reloaded.filters.tag_filter, TagFilter::Tag("api".into()));

        app.reset_filters();
        assert_eq!(
            app.store().raw(FILTERS_KEY).as_deref(),
            Some(r#"{"query":"","tagFilter":"all"}"#)
        );
    }

    #[test]
    fn test_visible_follows_filters() {
        let mut app = app();
        app.set_tag_filter(TagFilter::from("node"));
        let visible = app.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Fastify health route");

        app.set_tag_filter(TagFilter::All);
        app.set_query("FETCH");
        assert_eq!(app.visible()[0].title, "Fetch JSON");
    }

    #[test]
    fn test_available_tags() {
        let app = app();
        assert_eq!(
            app.available_tags(),
            vec!["api", "fastify", "javascript", "node"]
        );
    }

    #[test]
    fn test_import_replaces_library() {
        let mut app = app();
        let count = app
            .import_json(r#"[{"id":"1","title":"Fetch","code":"await fetch()","tags":["api"]}]"#)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(app.snippets.len(), 1);
        assert_eq!(app.success_message.as_deref(), Some("Imported 1 snippets."));
        assert_eq!(load_snippets(app.store(), Vec::new()), app.snippets);
    }

    #[test]
    fn test_failed_import_keeps_library() {
        let mut app = app();
        assert!(app.import_json("{}").is_err());
        assert_eq!(app.snippets, default_snippets());
        assert!(
            app.error_message
                .as_deref()
                .unwrap()
                .starts_with("Import failed:")
        );
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut app = app();
        app.add_snippet("One", "1", "a").unwrap();
        let json = app.export_json().unwrap();
        let before = app.snippets.clone();

        app.import_json(&json).unwrap();
        assert_eq!(app.snippets, before);
    }

    #[test]
    fn test_remove_snippet() {
        let mut app = app();
        let removed = app.remove_snippet("s1").unwrap();
        assert_eq!(removed.title, "Fetch JSON");
        assert!(app.find("s1").is_none());
        assert!(app.remove_snippet("s1").is_none());
    }

    #[test]
    fn test_copy_snippet() {
        let mut app = app();
        let mut copied = String::new();
        assert!(app.copy_snippet("s2", |text| {
            copied = text.to_string();
            Ok(())
        }));
        assert!(copied.contains("/health"));
        assert_eq!(
            app.success_message.as_deref(),
            Some("Copied: Fastify health route")
        );

        assert!(!app.copy_snippet("s2", |_| Err(ClipboardError::Failed("xclip"))));
        assert_eq!(app.error_message.as_deref(), Some("Clipboard not available."));

        assert!(!app.copy_snippet("missing", |_| Ok(())));
    }
}
