use crate::commands::DisplayItem;
use crate::error::{Result, StockyError};
use crate::inventory::InventoryStore;
use crate::store::BlobStore;
use uuid::Uuid;

/// The full collection with canonical 1-based handles attached.
pub fn indexed_items<B: BlobStore>(store: &InventoryStore<B>) -> Vec<DisplayItem> {
    store
        .list_all()
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            item,
            index: i + 1,
        })
        .collect()
}

/// Resolve a user-facing handle to the stable item id.
pub fn resolve_index<B: BlobStore>(store: &InventoryStore<B>, index: usize) -> Result<Uuid> {
    store
        .list_all()
        .get(index.wrapping_sub(1))
        .map(|item| item.id)
        .ok_or_else(|| StockyError::Api(format!("No item at index {}", index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn indexes_follow_insertion_order() {
        let mut store = InventoryStore::new(InMemoryStore::new());
        store.create(ItemDraft::new("Chair", 5, "Furniture")).unwrap();
        store.create(ItemDraft::new("Lamp", 2, "Electronics")).unwrap();

        let indexed = indexed_items(&store);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].item.name, "Chair");
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].item.name, "Lamp");
    }

    #[test]
    fn resolve_rejects_out_of_range_handles() {
        let mut store = InventoryStore::new(InMemoryStore::new());
        store.create(ItemDraft::new("Chair", 5, "Furniture")).unwrap();

        assert!(resolve_index(&store, 1).is_ok());
        assert!(resolve_index(&store, 0).is_err());
        assert!(resolve_index(&store, 2).is_err());
    }
}
