use crate::config::{AppConfig, StoreKind};
use crate::meals::{
    memory::InMemoryMealStore,
    repo::{MealStore, PgMealStore},
};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MealStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let store = match config.store {
            StoreKind::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is not set")?;
                Arc::new(PgMealStore::connect(url, config.max_connections).await?)
                    as Arc<dyn MealStore>
            }
            StoreKind::Memory => {
                info!("using in-memory meal store; data is lost on restart");
                Arc::new(InMemoryMealStore::new()) as Arc<dyn MealStore>
            }
        };

        Ok(Self::from_parts(store, Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn MealStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(InMemoryMealStore::new()),
            Arc::new(AppConfig::in_memory()),
        )
    }
}
