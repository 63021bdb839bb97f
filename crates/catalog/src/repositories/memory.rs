use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;
use tracing::debug;

use clearance_core::domain::item::{ClearanceItem, ItemId};

use super::{CatalogError, CatalogProvider, InteractionEvent, InteractionLog};
use crate::fixtures;

pub const DEFAULT_INTERACTION_LOG_CAPACITY: usize = 1_000;

/// Immutable, ordered catalog held in memory.
#[derive(Debug)]
pub struct StaticCatalog {
    items: Vec<ClearanceItem>,
    index: HashMap<ItemId, usize>,
}

impl StaticCatalog {
    pub fn new(items: Vec<ClearanceItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        Ok(Self { items, index })
    }

    /// The built-in seed catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(fixtures::clearance_items())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ClearanceItem] {
        &self.items
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_items(&self) -> Result<Vec<ClearanceItem>, CatalogError> {
        Ok(self.items.clone())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<ClearanceItem>, CatalogError> {
        Ok(self.index.get(id).and_then(|&position| self.items.get(position)).cloned())
    }
}

/// Bounded, process-lifetime interaction buffer. The oldest event is dropped
/// once capacity is reached.
pub struct InMemoryInteractionLog {
    capacity: usize,
    events: RwLock<VecDeque<InteractionEvent>>,
}

impl InMemoryInteractionLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, events: RwLock::new(VecDeque::with_capacity(capacity.min(64))) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

impl Default for InMemoryInteractionLog {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACTION_LOG_CAPACITY)
    }
}

#[async_trait::async_trait]
impl InteractionLog for InMemoryInteractionLog {
    async fn record(&self, event: InteractionEvent) -> Result<(), CatalogError> {
        let mut events = self.events.write().await;
        while events.len() >= self.capacity {
            if let Some(dropped) = events.pop_front() {
                debug!(
                    event_name = "interaction.log.evicted",
                    interaction_id = %dropped.id,
                    "interaction log at capacity"
                );
            }
        }
        events.push_back(event);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<InteractionEvent>, CatalogError> {
        let events = self.events.read().await;
        let skip = events.len().saturating_sub(limit);
        Ok(events.iter().skip(skip).cloned().collect())
    }
}
