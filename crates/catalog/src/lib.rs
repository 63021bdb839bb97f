pub mod fixtures;
pub mod repositories;

pub use fixtures::clearance_items;
pub use repositories::{
    CatalogError, CatalogProvider, InMemoryInteractionLog, InteractionEvent, InteractionLog,
    StaticCatalog,
};
