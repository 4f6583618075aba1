use clap::{Parser, Subcommand};
use stocky::model::Category;
use stocky::query::SortMode;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stocky", version = get_version())]
#[command(about = "Track what you have, from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the inventory
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// How many you have (positive)
        quantity: u32,

        /// One of the fixed categories
        #[arg(value_parser = parse_category)]
        category: String,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Show only items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Order: name (A-Z) or quantity (high to low)
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortMode>,
    },

    /// Search items by name (shorthand for list --search)
    Search { term: String },

    /// Edit an item's fields
    #[command(alias = "e")]
    Edit {
        /// Handle from the list output (e.g. 2)
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity (positive)
        #[arg(short, long)]
        quantity: Option<u32>,

        /// New category
        #[arg(long, value_parser = parse_category)]
        category: Option<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Handle from the list output (e.g. 2)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the available categories
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_category(s: &str) -> Result<String, String> {
    let category: Category = s.parse()?;
    Ok(category.to_string())
}

fn parse_sort(s: &str) -> Result<SortMode, String> {
    s.parse()
}
