//! Service wiring: pick a catalog backend from config and build it once.

use std::sync::Arc;

use anyhow::Context;

use cerebral_infra::{
    CatalogRepository, CatalogService, InMemoryCatalogRepository, PostgresCatalogRepository, db, seed,
};

use crate::config::{AppConfig, StoreBackend};

/// Shared, type-erased catalog service handed to every handler.
pub type Catalog = CatalogService<Arc<dyn CatalogRepository>>;

#[derive(Clone)]
pub struct AppServices {
    pub catalog: Catalog,
}

impl AppServices {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog: CatalogService::new(repo),
        }
    }
}

pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let repo: Arc<dyn CatalogRepository> = match &config.store {
        StoreBackend::InMemory => {
            tracing::info!("using in-memory catalog store");
            Arc::new(InMemoryCatalogRepository::new())
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => Arc::new(build_persistent_repository(database_url, *max_connections).await?),
    };

    if config.seed_on_start {
        seed::run(repo.as_ref())
            .await
            .context("failed to seed catalog")?;
    }

    Ok(AppServices::new(repo))
}

async fn build_persistent_repository(
    database_url: &str,
    max_connections: u32,
) -> anyhow::Result<PostgresCatalogRepository> {
    tracing::info!(max_connections, "using postgres catalog store");

    let pool = db::connect(database_url, max_connections)
        .await
        .context("failed to connect to Postgres")?;
    db::migrate(&pool)
        .await
        .context("failed to apply catalog schema")?;

    Ok(PostgresCatalogRepository::new(pool))
}
