use std::collections::BTreeSet;

use crate::models::Snippet;

/// Turns comma separated tag input into lowercase tag tokens.
///
/// Each piece is trimmed and lowercased, empty pieces are dropped, and the
/// remaining order is kept. Duplicates are left alone.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// All tags used across `snippets`, unique and sorted
pub fn available_tags(snippets: &[Snippet]) -> Vec<String> {
    snippets
        .iter()
        .flat_map(|snippet| snippet.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, tags: &[&str]) -> Snippet {
        Snippet {
            id: id.to_string(),
            title: format!("Snippet {}", id),
            code: String::from("code"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_tags_normalizes() {
        assert_eq!(parse_tags("API, auth , node"), vec!["api", "auth", "node"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_parse_tags_keeps_order_and_duplicates() {
        assert_eq!(parse_tags("b,a,B"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_available_tags_sorted_unique() {
        let snippets = vec![
            snippet("1", &["node", "api"]),
            snippet("2", &["api", "fastify"]),
            snippet("3", &[]),
        ];
        assert_eq!(available_tags(&snippets), vec!["api", "fastify", "node"]);
    }
}
