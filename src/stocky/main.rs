use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use stocky::api::{CmdMessage, ConfigAction, MessageLevel, StockyApi};
use stocky::commands::DisplayItem;
use stocky::error::{Result, StockyError};
use stocky::model::{Category, ItemDraft, ItemPatch};
use stocky::query::SortMode;
use stocky::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockyApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context();

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            category,
        }) => handle_add(&mut ctx, name, quantity, category),
        Some(Commands::List { search, sort }) => handle_list(&ctx, search, sort),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term), None),
        Some(Commands::Edit {
            index,
            name,
            quantity,
            category,
        }) => handle_edit(&mut ctx, index, name, quantity, category),
        Some(Commands::Delete { index, force }) => handle_delete(&mut ctx, index, force),
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context() -> AppContext {
    let data_dir = match std::env::var("STOCKY_HOME") {
        Ok(home) => PathBuf::from(home),
        Err(_) => ProjectDirs::from("com", "stocky", "stocky")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir.clone());
    AppContext {
        api: StockyApi::new(store, data_dir),
    }
}

fn handle_add(ctx: &mut AppContext, name: String, quantity: u32, category: String) -> Result<()> {
    let result = ctx.api.add_item(ItemDraft::new(name, quantity, category))?;
    print_messages(&result.messages);
    exit_on_errors(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, sort: Option<SortMode>) -> Result<()> {
    let mut view = ctx.api.default_view();
    if let Some(term) = search {
        view.search = term;
    }
    if let Some(mode) = sort {
        view.sort = mode;
    }

    let result = ctx.api.list_items(&view)?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    name: Option<String>,
    quantity: Option<u32>,
    category: Option<String>,
) -> Result<()> {
    let patch = ItemPatch {
        name,
        quantity,
        category,
    };
    let result = ctx.api.update_item(index, &patch)?;
    print_messages(&result.messages);
    exit_on_errors(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize, force: bool) -> Result<()> {
    if !force {
        let item = ctx.api.item_at(index)?;
        print!("Delete '{}'? [y/N] ", item.name);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_item(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories() -> Result<()> {
    for category in Category::ALL {
        println!("{}", category);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) | (Some("default-sort"), None) => ConfigAction::ShowAll,
        (Some("default-sort"), Some(v)) => {
            let sort: SortMode = v.parse().map_err(StockyError::Api)?;
            ConfigAction::SetDefaultSort(sort)
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-sort = {}", config.default_sort);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn exit_on_errors(messages: &[CmdMessage]) {
    if messages
        .iter()
        .any(|m| matches!(m.level, MessageLevel::Error))
    {
        std::process::exit(1);
    }
}

const LINE_WIDTH: usize = 92;
const TIME_WIDTH: usize = 14;
const QTY_WIDTH: usize = 7;
const CATEGORY_WIDTH: usize = 13;

fn print_items(items: &[DisplayItem]) {
    if items.is_empty() {
        println!("No items in inventory.");
        println!(
            "{}",
            "Add your first item with: stocky add <name> <quantity> <category>".dimmed()
        );
        return;
    }

    for di in items {
        let idx_str = format!("{:>3}. ", di.index);

        let fixed = idx_str.width() + QTY_WIDTH + CATEGORY_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let name = truncate_to_width(&di.item.name, available);
        let name_padding = available.saturating_sub(name.width());

        let qty = format!("{:>width$}", format!("x{}", di.item.quantity), width = QTY_WIDTH);
        let category = format!(
            "{:<width$}",
            truncate_to_width(&di.item.category, CATEGORY_WIDTH),
            width = CATEGORY_WIDTH
        );
        let age = format_time_ago(di.item.created_at);

        println!(
            "{}{}{}{} {} {}",
            idx_str,
            name,
            " ".repeat(name_padding),
            qty,
            category.yellow(),
            age.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
