pub mod export;
pub mod snippet;
pub mod storage;
pub mod tags;

pub use export::{
    DEFAULT_EXPORT_FILE, FormatError, ImportError, export_snippets, export_to_file,
    import_snippets,
};
pub use snippet::{MAX_SNIPPETS, Snippet, SnippetError, is_valid_snippet};
pub use storage::{load_filter_state, load_snippets, save_filter_state, save_snippets};
pub use tags::{available_tags, parse_tags};
