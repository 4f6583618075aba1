use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::model::ItemPatch;
use crate::store::BlobStore;

use super::helpers::resolve_index;

pub fn run<B: BlobStore>(
    store: &mut InventoryStore<B>,
    index: usize,
    patch: &ItemPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let errors = patch.validate();
    if !errors.is_empty() {
        for error in errors {
            result.add_message(CmdMessage::error(error.to_string()));
        }
        return Ok(result);
    }

    let id = resolve_index(store, index)?;
    let item = store.update(id, patch)?;
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        index, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}
