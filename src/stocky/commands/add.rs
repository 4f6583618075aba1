use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::model::ItemDraft;
use crate::store::BlobStore;

pub fn run<B: BlobStore>(store: &mut InventoryStore<B>, draft: ItemDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let errors = draft.validate();
    if !errors.is_empty() {
        // Per-field messages; the store is not touched
        for error in errors {
            result.add_message(CmdMessage::error(error.to_string()));
        }
        return Ok(result);
    }

    let item = store.create(draft)?;
    result.add_message(CmdMessage::success(format!(
        "Item added: {} (x{}, {})",
        item.name, item.quantity, item.category
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn store() -> InventoryStore<InMemoryStore> {
        InventoryStore::new(InMemoryStore::new())
    }

    #[test]
    fn adds_a_valid_item() {
        let mut store = store();
        let result = run(&mut store, ItemDraft::new("Chair", 5, "Furniture")).unwrap();

        assert_eq!(result.affected_items.len(), 1);
        assert_eq!(store.list_all().len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
    }

    #[test]
    fn invalid_draft_reports_fields_and_skips_the_store() {
        let mut store = store();
        let result = run(&mut store, ItemDraft::new("", 0, "Furniture")).unwrap();

        assert!(result.affected_items.is_empty());
        assert_eq!(result.messages.len(), 2);
        assert!(store.list_all().is_empty());
    }
}
