use std::sync::Arc;

use clearance_catalog::{
    CatalogError, CatalogProvider, InMemoryInteractionLog, InteractionLog, StaticCatalog,
};
use clearance_core::config::AppConfig;
use clearance_core::engine::ClearanceEngine;
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub engine: Arc<ClearanceEngine>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub interactions: Arc<dyn InteractionLog>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("catalog initialisation failed: {0}")]
    Catalog(#[source] CatalogError),
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let catalog = StaticCatalog::seeded().map_err(BootstrapError::Catalog)?;
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        item_count = catalog.len(),
        "clearance catalog loaded"
    );

    let engine = ClearanceEngine::new(config.engine.clone());
    info!(
        event_name = "system.bootstrap.engine_ready",
        correlation_id = "bootstrap",
        urgency_source = ?config.engine.urgency_source,
        recent_capacity = config.engine.recent_capacity,
        seeded = config.engine.rng_seed.is_some(),
        "recommendation engine initialised"
    );

    let interactions = InMemoryInteractionLog::new(config.engine.interaction_log_capacity);

    Ok(Application {
        config,
        engine: Arc::new(engine),
        catalog: Arc::new(catalog),
        interactions: Arc::new(interactions),
    })
}

#[cfg(test)]
mod tests {
    use clearance_catalog::CatalogProvider;
    use clearance_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use clearance_core::domain::item::ItemId;
    use clearance_core::domain::profile::UserProfile;
    use clearance_core::domain::session::SessionContext;

    use crate::bootstrap::bootstrap_with_config;

    #[tokio::test]
    async fn bootstrap_wires_seeded_engine_and_catalog() {
        let config = AppConfig::load(LoadOptions {
            overrides: ConfigOverrides { rng_seed: Some(7), ..ConfigOverrides::default() },
            ..LoadOptions::default()
        })
        .expect("default config is valid");
        let app = bootstrap_with_config(config).await.expect("bootstrap should succeed");

        assert_eq!(app.config.engine.rng_seed, Some(7));

        let items = app.catalog.list_items().await.expect("catalog lists items");
        assert_eq!(items.len(), 75);

        let lamp = app.catalog.find_by_id(&ItemId::new("o1")).await.expect("lookup");
        assert!(lamp.is_some());

        let selected = app.engine.select_best_items(
            &items,
            &UserProfile::new("user123"),
            &SessionContext::new("home"),
            1,
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(app.engine.recently_shown(), vec![selected[0].id.clone()]);
    }
}
