//! History list ordering.

use serde::{Deserialize, Serialize};

/// Order in which the history list is shown.
///
/// Purely presentational; the engine's history is always oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start at the top.
    #[default]
    Chronological,
    /// Latest move at the top.
    Reversed,
}

impl HistoryOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Chronological => HistoryOrder::Reversed,
            HistoryOrder::Reversed => HistoryOrder::Chronological,
        }
    }

    /// Arranges `items` (given oldest first) in this order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == HistoryOrder::Reversed {
            items.reverse();
        }
        items
    }
}
