use std::sync::Arc;
use tokio::sync::RwLock;

use catalog_core::Catalog;

use crate::config::ServerConfig;

/// Reads take the read lock; every mutation holds the write lock from its
/// existence and editor checks through the insert or merge.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let catalog = if config.catalog.seed_demo_data {
            Catalog::with_seed()
        } else {
            Catalog::new()
        };
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            config: Arc::new(config),
        }
    }
}
