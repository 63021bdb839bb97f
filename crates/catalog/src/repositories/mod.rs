use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clearance_core::domain::item::{ClearanceItem, ItemId};
use clearance_core::errors::{ApplicationError, DomainError};

pub mod memory;

pub use memory::{InMemoryInteractionLog, StaticCatalog, DEFAULT_INTERACTION_LOG_CAPACITY};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate catalog item id `{0}`")]
    DuplicateItem(ItemId),
    #[error(transparent)]
    InvalidItem(#[from] DomainError),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<CatalogError> for ApplicationError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::InvalidItem(domain) => ApplicationError::Domain(domain),
            other => ApplicationError::Catalog(other.to_string()),
        }
    }
}

/// Source of clearance candidates.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All items in catalog order.
    async fn list_items(&self) -> Result<Vec<ClearanceItem>, CatalogError>;
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<ClearanceItem>, CatalogError>;
}

/// One client-reported interaction, stamped on arrival.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub id: String,
    pub user_id: Option<String>,
    pub action: Option<String>,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

impl InteractionEvent {
    /// Wraps an arbitrary client payload. `user_id` and `action` are lifted out
    /// when present as strings.
    pub fn from_payload(payload: serde_json::Value) -> Self {
        let field = |name: &str| payload.get(name).and_then(|value| value.as_str()).map(String::from);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: field("user_id"),
            action: field("action"),
            payload,
            recorded_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait InteractionLog: Send + Sync {
    async fn record(&self, event: InteractionEvent) -> Result<(), CatalogError>;
    /// Newest last, at most `limit` events.
    async fn recent(&self, limit: usize) -> Result<Vec<InteractionEvent>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use clearance_core::domain::item::ItemId;
    use clearance_core::errors::{ApplicationError, DomainError};

    use super::{CatalogError, InteractionEvent};

    #[test]
    fn interaction_event_lifts_known_fields() {
        let event = InteractionEvent::from_payload(json!({
            "user_id": "user123",
            "action": "popup_dismissed",
            "item_id": "o1"
        }));

        assert_eq!(event.user_id.as_deref(), Some("user123"));
        assert_eq!(event.action.as_deref(), Some("popup_dismissed"));
        assert_eq!(event.payload["item_id"], "o1");
        assert!(uuid::Uuid::parse_str(&event.id).is_ok());
    }

    #[test]
    fn interaction_event_tolerates_missing_fields() {
        let event = InteractionEvent::from_payload(json!({ "user_id": 42 }));

        assert!(event.user_id.is_none());
        assert!(event.action.is_none());
    }

    #[test]
    fn catalog_errors_map_to_application_errors() {
        let invalid = CatalogError::InvalidItem(DomainError::InvariantViolation("x".to_string()));
        assert!(matches!(ApplicationError::from(invalid), ApplicationError::Domain(_)));

        let duplicate = CatalogError::DuplicateItem(ItemId::new("e1"));
        assert!(matches!(ApplicationError::from(duplicate), ApplicationError::Catalog(_)));

        let down = CatalogError::Unavailable("offline".to_string());
        assert!(matches!(ApplicationError::from(down), ApplicationError::Catalog(_)));
    }
}
