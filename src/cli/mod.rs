//! CLI Module for snipvault
//! Parses the command line, opens the store from the configured data
//! directory and runs one command against the session.

pub mod commands;

use anyhow::{Context, Result};
use colored::Colorize;
use snipvault::App;
use snipvault::config::Config;
use snipvault::store::FileStore;

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };

    if command == "help" || command == "--help" || command == "-h" {
        print_help();
        return Ok(());
    }

    let config = Config::load();
    let data_dir = config.data_dir()?;
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open store at {}", data_dir.display()))?;
    let mut app = App::new(store);

    match command.as_str() {
        "list" | "ls" => commands::list_snippets(&app),
        "search" | "find" => {
            let query = args[1..].join(" ");
            app.set_query(&query);
            commands::list_snippets(&app);
        }
        "tag" => {
            let Some(tag) = args.get(1) else {
                return missing_argument("tag name or 'all'", "snipvault tag <TAG|all>");
            };
            app.set_tag_filter(tag.as_str().into());
            commands::list_snippets(&app);
        }
        "tags" => commands::list_tags(&app),
        "reset" => {
            app.reset_filters();
            commands::list_snippets(&app);
        }
        "add" | "new" => {
            if args.len() < 3 {
                return missing_argument("title or code", "snipvault add <TITLE> <CODE|-> [TAGS]");
            }
            let tags = args.get(3).map(String::as_str).unwrap_or("");
            commands::add_snippet(&mut app, &args[1], &args[2], tags)?;
        }
        "show" | "view" | "cat" => {
            let Some(id) = args.get(1) else {
                return missing_argument("snippet ID", "snipvault show <ID>");
            };
            commands::show_snippet(&app, id);
        }
        "copy" | "cp" => {
            let Some(id) = args.get(1) else {
                return missing_argument("snippet ID", "snipvault copy <ID>");
            };
            commands::copy_snippet(&mut app, id);
        }
        "rm" | "remove" => {
            let Some(id) = args.get(1) else {
                return missing_argument("snippet ID", "snipvault rm <ID>");
            };
            app.remove_snippet(id);
        }
        "export" => {
            let path = args
                .get(1)
                .cloned()
                .unwrap_or_else(|| config.export_file.clone());
            commands::export_snippets(&mut app, path.as_ref())?;
        }
        "import" => {
            let Some(path) = args.get(1) else {
                return missing_argument("file path", "snipvault import <PATH>");
            };
            commands::import_snippets(&mut app, path.as_ref())?;
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), command);
            print_help();
            return Ok(());
        }
    }

    commands::print_status(&app);
    Ok(())
}

fn missing_argument(what: &str, usage: &str) -> Result<()> {
    println!("{}  Error: Missing {}", "┃".bright_magenta(), what);
    println!("{}  Usage: {}", "┃".bright_magenta(), usage);
    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPVAULT - SNIPPET LIBRARY".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipvault [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let commands = [
        ("list, ls", "List snippets matching the saved filters"),
        ("search <QUERY>", "Set the search query (empty clears it)"),
        ("tag <TAG|all>", "Only show snippets with this tag"),
        ("tags", "List every tag in the library"),
        ("reset", "Clear the query and tag filter"),
        ("add <TITLE> <CODE|-> [TAGS]", "Add a snippet; '-' reads code from stdin"),
        ("show, view <ID>", "Display a snippet"),
        ("copy <ID>", "Copy a snippet's code to the clipboard"),
        ("rm <ID>", "Delete a snippet"),
        ("export [PATH]", "Write the library as JSON"),
        ("import <PATH>", "Replace the library with a JSON export"),
        ("help", "Display this help message"),
    ];
    for (usage, description) in commands {
        println!(
            "{}  {:<29} {}",
            "┃".bright_magenta(),
            usage.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Set SNIPVAULT_DATA_DIR to keep the library somewhere else",
        "┃".bright_magenta()
    );
}
