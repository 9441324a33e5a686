use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Snippet;

/// Sentinel stored in place of a tag when no tag constraint is active
pub const ALL_TAGS: &str = "all";

/// Tag constraint applied to the library listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    fn accepts(&self, snippet: &Snippet) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => snippet.tags.iter().any(|t| t == tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        if value == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }
}

impl From<String> for TagFilter {
    fn from(value: String) -> Self {
        if value == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(value)
        }
    }
}

impl From<TagFilter> for String {
    fn from(filter: TagFilter) -> Self {
        match filter {
            TagFilter::All => ALL_TAGS.to_string(),
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current search query and tag constraint, persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    #[serde(rename = "tagFilter")]
    pub tag_filter: TagFilter,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.tag_filter == TagFilter::All
    }
}

/// Returns the snippets passing both the tag and the text predicate, in
/// their original order.
///
/// The text predicate lowercases the trimmed query and looks for it inside
/// `"{title} {code} {tags}"`. A blank query matches everything.
pub fn filter_snippets<'a>(
    snippets: &'a [Snippet],
    query: &str,
    tag_filter: &TagFilter,
) -> Vec<&'a Snippet> {
    let query = query.trim().to_lowercase();

    snippets
        .iter()
        .filter(|snippet| tag_filter.accepts(snippet))
        .filter(|snippet| query.is_empty() || haystack(snippet).contains(&query))
        .collect()
}

fn haystack(snippet: &Snippet) -> String {
    format!(
        "{} {} {}",
        snippet.title,
        snippet.code,
        snippet.tags.join(" ")
    )
    .to_lowercase()
}
