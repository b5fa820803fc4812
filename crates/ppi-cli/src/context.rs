//! Wiring of concrete repositories and clients for one CLI invocation.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use ppi_application::{AuthUseCase, HistoryUseCase, PredictionUseCase};
use ppi_core::config::RootConfig;
use ppi_core::session::SessionRepository;
use ppi_infrastructure::{ConfigService, JsonHistoryRepository, JsonSessionRepository, PpiPaths};
use ppi_interaction::PpiApiClient;

use crate::render::Palette;

/// `config.toml` plus `PPI_API_BASE`, with `api_base` taking precedence over both.
pub fn effective_config(service: &ConfigService, api_base: Option<String>) -> Result<RootConfig> {
    let mut config = service.get_config()?;
    if let Some(base_url) = api_base {
        config.api.base_url = base_url;
    }
    Ok(config)
}

pub struct AppContext {
    pub paths: PpiPaths,
    pub config: RootConfig,
    pub session: Arc<JsonSessionRepository>,
    history: Arc<JsonHistoryRepository>,
    client: Arc<PpiApiClient>,
}

impl AppContext {
    /// Resolves the storage root, loads configuration and opens the stores.
    pub async fn load(home: Option<&Path>, api_base: Option<String>) -> Result<Self> {
        let paths = PpiPaths::new(home)?;
        let config = effective_config(&ConfigService::new(&paths), api_base)?;
        tracing::debug!(
            root = %paths.root().display(),
            api = %config.api.base_url,
            "Loaded configuration"
        );

        let session = Arc::new(JsonSessionRepository::new(&paths).await?);
        let history = Arc::new(JsonHistoryRepository::new(&paths));
        let client = Arc::new(PpiApiClient::new(config.api.clone())?);

        Ok(Self {
            paths,
            config,
            session,
            history,
            client,
        })
    }

    pub fn prediction(&self) -> PredictionUseCase {
        PredictionUseCase::new(self.client.clone(), self.history.clone())
    }

    pub fn auth(&self) -> AuthUseCase {
        AuthUseCase::new(self.client.clone(), self.session.clone())
    }

    pub fn history(&self) -> HistoryUseCase {
        HistoryUseCase::new(self.history.clone())
    }

    pub async fn palette(&self) -> Palette {
        Palette::for_theme(self.session.get_theme().await)
    }
}
