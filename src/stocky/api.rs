//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for any
//! client of the library. It dispatches, normalizes inputs, and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation concerns live here.
//!
//! `StockyApi<B: BlobStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use std::path::PathBuf;

use crate::commands;
use crate::config::StockyConfig;
use crate::error::{Result, StockyError};
use crate::inventory::InventoryStore;
use crate::model::{Item, ItemDraft, ItemPatch};
use crate::query::ViewState;
use crate::store::BlobStore;

pub struct StockyApi<B: BlobStore> {
    store: InventoryStore<B>,
    config_dir: PathBuf,
}

impl<B: BlobStore> StockyApi<B> {
    pub fn new(blobs: B, config_dir: PathBuf) -> Self {
        Self {
            store: InventoryStore::new(blobs),
            config_dir,
        }
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_items(&self, view: &ViewState) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, view)
    }

    pub fn update_item(&mut self, index: usize, patch: &ItemPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, index, patch)
    }

    pub fn delete_item(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    /// The item behind a user-facing handle, for pre-populating edits and
    /// confirmation prompts.
    pub fn item_at(&self, index: usize) -> Result<Item> {
        let id = commands::helpers::resolve_index(&self.store, index)?;
        self.store
            .list_all()
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(StockyError::ItemNotFound(id))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// A view seeded from the persisted default sort.
    pub fn default_view(&self) -> ViewState {
        let config = StockyConfig::load(&self.config_dir).unwrap_or_default();
        ViewState::with_sort(config.default_sort)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayItem, MessageLevel};
