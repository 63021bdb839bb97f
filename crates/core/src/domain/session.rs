use serde::{Deserialize, Serialize};

use crate::domain::item::ItemId;

/// Request-scoped browsing context. The shown list is supplied by the caller on
/// every request and never stored server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub current_page: String,
    pub target_category: Option<String>,
    #[serde(default)]
    pub shown_items: Vec<ItemId>,
}

impl SessionContext {
    pub fn new(current_page: impl Into<String>) -> Self {
        Self { current_page: current_page.into(), ..Self::default() }
    }

    pub fn with_target_category(mut self, category: impl Into<String>) -> Self {
        self.target_category = Some(category.into());
        self
    }

    pub fn with_shown(mut self, shown_items: impl IntoIterator<Item = ItemId>) -> Self {
        self.shown_items.extend(shown_items);
        self
    }

    /// Blank category names count as "no filter".
    pub fn category_filter(&self) -> Option<&str> {
        self.target_category.as_deref().map(str::trim).filter(|value| !value.is_empty())
    }
}
