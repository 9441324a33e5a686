use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use snipvault::App;
use snipvault::Snippet;
use snipvault::clipboard::copy_to_clipboard;
use snipvault::search::TagFilter;
use snipvault::store::KeyValueStore;
use unicode_width::UnicodeWidthStr;

const TITLE_WIDTH: usize = 32;

/// Lists the snippets visible under the current filters
pub fn list_snippets<S: KeyValueStore>(app: &App<S>) {
    let visible = app.visible();

    println!(
        "{}  {} ({})",
        "┃".bright_magenta(),
        "LIBRARY".bold(),
        visible.len()
    );
    print_filters(app);
    println!("{}", "─".repeat(60).bright_magenta());

    if visible.is_empty() {
        println!("{}  No snippets match this filter.", "┃".bright_magenta());
        return;
    }

    for snippet in visible {
        println!(
            "{}  {}  {}  {}",
            "┃".bright_magenta(),
            pad_to_width(&snippet.title, TITLE_WIDTH).bright_white().bold(),
            snippet.tag_line().bright_green(),
            snippet.id.bright_black()
        );
    }
}

fn print_filters<S: KeyValueStore>(app: &App<S>) {
    if app.filters.is_default() {
        return;
    }
    if !app.filters.query.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Query".bright_blue(),
            app.filters.query
        );
    }
    if let TagFilter::Tag(tag) = &app.filters.tag_filter {
        println!("{}  {}: {}", "┃".bright_magenta(), "Tag".bright_blue(), tag);
    }
}

/// Pads or truncates `text` to exactly `width` terminal columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    let padding = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(padding));
    out
}

/// Lists every tag in the library
pub fn list_tags<S: KeyValueStore>(app: &App<S>) {
    let tags = app.available_tags();

    if tags.is_empty() {
        println!("{}  No tags yet.", "┃".bright_magenta());
        return;
    }

    println!("{}  {} tags:", "┃".bright_magenta(), tags.len());
    for tag in tags {
        let count = app.snippets.iter().filter(|s| s.tags.contains(&tag)).count();
        let marker = if app.filters.tag_filter.as_str() == tag {
            "●".bright_yellow()
        } else {
            " ".normal()
        };
        println!(
            "{}  {} {} {}",
            "┃".bright_magenta(),
            marker,
            tag.bright_white(),
            format!("({})", count).bright_black()
        );
    }
}

/// Displays a single snippet with its code
pub fn show_snippet<S: KeyValueStore>(app: &App<S>, id: &str) {
    match app.find(id) {
        Some(snippet) => display_snippet_content(snippet),
        None => {
            println!("{}  No snippet found with ID: {}", "┃".bright_magenta(), id);
        }
    }
}

fn display_snippet_content(snippet: &Snippet) {
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Tags".bright_yellow(),
        snippet.tag_line()
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Lines".bright_cyan(),
        snippet.line_count()
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "ID".bright_black(),
        snippet.id
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for line in snippet.code.lines() {
        println!("{}  {}", "┃".bright_magenta(), line);
    }
}

/// Adds a snippet; a code argument of `-` reads the code from stdin
pub fn add_snippet<S: KeyValueStore>(
    app: &mut App<S>,
    title: &str,
    code: &str,
    tags: &str,
) -> Result<()> {
    let code = if code == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read code from stdin")?;
        buffer
    } else {
        code.to_string()
    };

    if let Ok(snippet) = app.add_snippet(title, &code, tags) {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "ID".bright_black(),
            snippet.id
        );
    }
    Ok(())
}

pub fn copy_snippet<S: KeyValueStore>(app: &mut App<S>, id: &str) {
    app.copy_snippet(id, copy_to_clipboard);
}

pub fn export_snippets<S: KeyValueStore>(app: &mut App<S>, path: &Path) -> Result<()> {
    app.export_to(path)?;
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "File".bright_blue(),
        path.display()
    );
    Ok(())
}

/// Replaces the library with the contents of a JSON export file
pub fn import_snippets<S: KeyValueStore>(app: &mut App<S>, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;

    // Failures are reported through the status line
    let _ = app.import_json(&content);
    Ok(())
}

/// Prints the session's status message, if any
pub fn print_status<S: KeyValueStore>(app: &App<S>) {
    if let Some(message) = &app.error_message {
        println!("{}  {}", "┃".bright_magenta(), message.bright_red());
    } else if let Some(message) = &app.success_message {
        println!("{}  {}", "┃".bright_magenta(), message.bright_green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_pads_short_titles() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
    }

    #[test]
    fn test_pad_to_width_truncates_wide_titles() {
        let padded = pad_to_width("日本語タイトル", 6);
        assert_eq!(padded, "日本語");
        assert_eq!(padded.width(), 6);
    }
}
