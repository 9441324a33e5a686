use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::tags::parse_tags;

/// Upper bound on the number of snippets kept on every save and import.
pub const MAX_SNIPPETS: usize = 500;

/// A titled, tagged piece of stored code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub code: String,
    pub tags: Vec<String>,
}

/// Reasons the creation flow refuses a new snippet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Code is required")]
    EmptyCode,
}

impl Snippet {
    /// Creates a snippet from form input.
    ///
    /// The title is trimmed, the code is kept as typed, and the tag text goes
    /// through [`parse_tags`]. Both title and code must contain something
    /// other than whitespace.
    pub fn new(title: &str, code: &str, tags: &str) -> Result<Self, SnippetError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SnippetError::EmptyTitle);
        }
        if code.trim().is_empty() {
            return Err(SnippetError::EmptyCode);
        }

        Ok(Self {
            id: Self::generate_id(),
            title: title.to_string(),
            code: code.to_string(),
            tags: parse_tags(tags),
        })
    }

    /// Generates a fresh snippet id such as `s-1718000000000-3f2a9c1d`.
    pub fn generate_id() -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("s-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
    }

    /// Builds a snippet out of untrusted JSON, checking each field.
    ///
    /// Returns `None` unless the value is an object whose `id`, `title` and
    /// `code` are strings and whose `tags` is an array of strings. Unknown
    /// keys are ignored. Empty strings are accepted here; emptiness rules
    /// belong to [`Snippet::new`].
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let id = object.get("id")?.as_str()?;
        let title = object.get("title")?.as_str()?;
        let code = object.get("code")?.as_str()?;
        let tags = object
            .get("tags")?
            .as_array()?
            .iter()
            .map(|tag| tag.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            id: id.to_string(),
            title: title.to_string(),
            code: code.to_string(),
            tags,
        })
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Tags joined for display, or `untagged`
    pub fn tag_line(&self) -> String {
        if self.tags.is_empty() {
            String::from("untagged")
        } else {
            self.tags.join(" • ")
        }
    }
}

/// True when `value` has the shape of a [`Snippet`].
pub fn is_valid_snippet(value: &Value) -> bool {
    Snippet::from_value(value).is_some()
}

/// Keeps the valid records of a parsed JSON array, in order, capped at
/// [`MAX_SNIPPETS`].
pub(crate) fn collect_valid(items: &[Value]) -> Vec<Snippet> {
    items
        .iter()
        .filter_map(Snippet::from_value)
        .take(MAX_SNIPPETS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_full_record() {
        let value = json!({"id": "1", "title": "Fetch", "code": "await fetch()", "tags": ["api"]});
        let snippet = Snippet::from_value(&value).unwrap();
        assert_eq!(snippet.id, "1");
        assert_eq!(snippet.title, "Fetch");
        assert_eq!(snippet.tags, vec!["api"]);
    }

    #[test]
    fn test_from_value_ignores_extra_keys_and_empty_strings() {
        let value = json!({"id": "", "title": "", "code": "", "tags": [], "lang": "js"});
        assert!(is_valid_snippet(&value));
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        assert!(!is_valid_snippet(&json!({"id": "1", "title": "t", "code": "c"})));
        assert!(!is_valid_snippet(&json!({"title": "t", "code": "c", "tags": []})));
        assert!(!is_valid_snippet(&json!({"bogus": true})));
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        assert!(!is_valid_snippet(&json!({"id": 1, "title": "t", "code": "c", "tags": []})));
        assert!(!is_valid_snippet(&json!({"id": "1", "title": "t", "code": null, "tags": []})));
        assert!(!is_valid_snippet(&json!({"id": "1", "title": "t", "code": "c", "tags": "api"})));
        assert!(!is_valid_snippet(&json!({"id": "1", "title": "t", "code": "c", "tags": ["api", 3]})));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(!is_valid_snippet(&json!(null)));
        assert!(!is_valid_snippet(&json!("snippet")));
        assert!(!is_valid_snippet(&json!([{"id": "1"}])));
    }

    #[test]
    fn test_new_trims_title_and_parses_tags() {
        let snippet = Snippet::new("  Retry fetch ", "for (;;) {}", "api,Retry").unwrap();
        assert_eq!(snippet.title, "Retry fetch");
        assert_eq!(snippet.code, "for (;;) {}");
        assert_eq!(snippet.tags, vec!["api", "retry"]);
        assert!(snippet.id.starts_with("s-"));
    }

    #[test]
    fn test_new_requires_title_and_code() {
        assert_eq!(Snippet::new("   ", "x", ""), Err(SnippetError::EmptyTitle));
        assert_eq!(Snippet::new("Title", " \n ", ""), Err(SnippetError::EmptyCode));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(Snippet::generate_id(), Snippet::generate_id());
    }

    #[test]
    fn test_collect_valid_caps_and_keeps_order() {
        let items: Vec<Value> = (0..MAX_SNIPPETS + 10)
            .map(|i| json!({"id": i.to_string(), "title": "t", "code": "c", "tags": []}))
            .collect();
        let valid = collect_valid(&items);
        assert_eq!(valid.len(), MAX_SNIPPETS);
        assert_eq!(valid[0].id, "0");
        assert_eq!(valid[MAX_SNIPPETS - 1].id, (MAX_SNIPPETS - 1).to_string());
    }

    #[test]
    fn test_tag_line() {
        let mut snippet = Snippet::new("t", "c", "").unwrap();
        assert_eq!(snippet.tag_line(), "untagged");
        snippet.tags = vec!["api".into(), "node".into()];
        assert_eq!(snippet.tag_line(), "api • node");
    }
}
