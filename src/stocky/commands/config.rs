use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockyConfig;
use crate::error::{Result, StockyError};
use crate::query::SortMode;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetDefaultSort(SortMode),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = StockyConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::SetDefaultSort(sort) => {
            let mut config = StockyConfig::load(config_dir)?;
            config.default_sort = sort;
            config
                .save(config_dir)
                .map_err(|e| StockyError::Store(format!("could not save config: {}", e)))?;

            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("default-sort = {}", sort)));
            Ok(result)
        }
    }
}
