//! The query/view layer: a pure function from (full item list, search text,
//! sort mode) to the displayed subset. No state, no memoization; the view is
//! recomputed in full whenever any input changes, which is fine at the tens
//! to low hundreds of items this tool is built for.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::Item;

/// How the displayed list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the store's insertion order.
    #[default]
    None,
    /// Ascending by name, case-insensitive.
    Name,
    /// Descending by quantity.
    Quantity,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Name => "name",
            SortMode::Quantity => "quantity",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SortMode::None),
            "name" => Ok(SortMode::Name),
            "quantity" | "qty" => Ok(SortMode::Quantity),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

/// The view inputs as one value type. Screens hold one of these and rebuild
/// the displayed list through [`apply`] on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortMode,
}

impl ViewState {
    pub fn with_sort(sort: SortMode) -> Self {
        Self {
            search: String::new(),
            sort,
        }
    }

    /// Tri-state toggle: selecting the active mode again turns sorting off;
    /// selecting any other mode switches to it.
    pub fn toggle_sort(&mut self, mode: SortMode) {
        self.sort = if self.sort == mode {
            SortMode::None
        } else {
            mode
        };
    }
}

/// Derive the displayed subset.
///
/// Filtering is a case-insensitive substring match of the search text
/// against the item name; blank search text filters nothing. Sorting is
/// stable, so ties keep the filtered (insertion) order.
pub fn apply(items: &[Item], view: &ViewState) -> Vec<Item> {
    let query = view.search.trim().to_lowercase();
    let mut shown: Vec<Item> = items
        .iter()
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    match view.sort {
        SortMode::None => {}
        SortMode::Name => {
            shown.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortMode::Quantity => shown.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
    }

    shown
}
