use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::store::BlobStore;

use super::helpers::resolve_index;

pub fn run<B: BlobStore>(store: &mut InventoryStore<B>, index: usize) -> Result<CmdResult> {
    let id = resolve_index(store, index)?;
    let name = store
        .list_all()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    if store.delete(id)? {
        result.add_message(CmdMessage::success(format!(
            "Item deleted ({}): {}",
            index, name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("No item at index {}", index)));
    }
    Ok(result)
}
