use crate::commands::{CmdResult, DisplayItem};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::query::{self, ViewState};
use crate::store::BlobStore;

use super::helpers::indexed_items;

pub fn run<B: BlobStore>(store: &InventoryStore<B>, view: &ViewState) -> Result<CmdResult> {
    let indexed = indexed_items(store);
    let items: Vec<_> = indexed.iter().map(|di| di.item.clone()).collect();

    // Reattach canonical handles after the pure filter/sort pass
    let listed = query::apply(&items, view)
        .into_iter()
        .filter_map(|item| {
            indexed
                .iter()
                .find(|di| di.item.id == item.id)
                .map(|di| DisplayItem {
                    index: di.index,
                    item,
                })
        })
        .collect();

    Ok(CmdResult::default().with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::ItemDraft;
    use crate::query::SortMode;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InventoryStore<InMemoryStore> {
        let mut store = InventoryStore::new(InMemoryStore::new());
        add::run(&mut store, ItemDraft::new("Chair", 3, "Furniture")).unwrap();
        add::run(&mut store, ItemDraft::new("Monitor", 9, "Electronics")).unwrap();
        add::run(&mut store, ItemDraft::new("Lamp", 5, "Electronics")).unwrap();
        store
    }

    #[test]
    fn lists_everything_in_insertion_order() {
        let store = seeded();
        let result = run(&store, &ViewState::default()).unwrap();
        let names: Vec<_> = result
            .listed_items
            .iter()
            .map(|di| di.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chair", "Monitor", "Lamp"]);
    }

    #[test]
    fn filtered_views_keep_canonical_handles() {
        let store = seeded();
        let view = ViewState {
            search: "lam".into(),
            ..Default::default()
        };
        let result = run(&store, &view).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.name, "Lamp");
        assert_eq!(result.listed_items[0].index, 3);
    }

    #[test]
    fn quantity_sort_orders_descending() {
        let store = seeded();
        let result = run(&store, &ViewState::with_sort(SortMode::Quantity)).unwrap();
        let quantities: Vec<_> = result
            .listed_items
            .iter()
            .map(|di| di.item.quantity)
            .collect();
        assert_eq!(quantities, vec![9, 5, 3]);
    }
}
