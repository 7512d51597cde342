// Application state shared by every handler

use std::sync::Arc;
use crate::catalog::Catalog;
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Builds the state once at startup; the catalog is owned by the configured tenant
    pub fn new(environment: EnvironmentVariables) -> Self {
        let catalog: Catalog = Catalog::fixtures(&environment.tenant_api_key);

        tracing::info!("Loaded fixture catalog with {} instances", catalog.len());

        Self {
            environment: Arc::new(environment),
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the environment and builds the state from it
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", environment);
        }

        Ok(Self::new(environment))
    }

    /// The single tenant credential accepted by this server
    pub fn tenant_key(&self) -> &str {
        &self.environment.tenant_api_key
    }
}
