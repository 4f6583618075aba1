//! The inventory store: sole reader and writer of the persisted collection.
//!
//! Every mutation is the same strict sequence: read the full collection,
//! compute the new one, write the full collection back. There is no partial
//! write and no concurrency check; a single-user, single-process usage model
//! is assumed.

use uuid::Uuid;

use crate::error::{Result, StockyError};
use crate::model::{Item, ItemDraft, ItemPatch};
use crate::store::{BlobStore, STORAGE_KEY};

/// Owns persisted access to the full item collection.
///
/// Generic over [`BlobStore`] so the same logic runs against the file-backed
/// store in production and the in-memory store in tests.
pub struct InventoryStore<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> InventoryStore<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// The full collection, in insertion order.
    ///
    /// An absent blob, a failed read, or a blob that does not parse all
    /// degrade to the empty list. There is no partial recovery.
    pub fn list_all(&self) -> Vec<Item> {
        match self.blobs.get(STORAGE_KEY) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    /// Append a new item and persist the whole collection.
    /// Fails only if the persistence write fails.
    pub fn create(&mut self, draft: ItemDraft) -> Result<Item> {
        let mut items = self.list_all();
        let item = Item::new(draft);
        items.push(item.clone());
        self.persist(&items)?;
        Ok(item)
    }

    /// Overlay `patch` onto the item with `id`, refresh its `updated_at`,
    /// and persist the whole collection.
    ///
    /// A missing id is [`StockyError::ItemNotFound`]; a failed write is a
    /// store error. Either way the persisted collection is unchanged.
    pub fn update(&mut self, id: Uuid, patch: &ItemPatch) -> Result<Item> {
        let mut items = self.list_all();
        let entry = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StockyError::ItemNotFound(id))?;
        entry.apply(patch);
        let updated = entry.clone();
        self.persist(&items)?;
        Ok(updated)
    }

    /// Remove every entry matching `id` and persist the reduced collection.
    /// Returns whether anything was removed; an unmatched id is not an error.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let mut items = self.list_all();
        let before = items.len();
        items.retain(|item| item.id != id);
        self.persist(&items)?;
        Ok(items.len() != before)
    }

    fn persist(&mut self, items: &[Item]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.blobs.set(STORAGE_KEY, &text)
    }
}
