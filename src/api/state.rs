//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, EnderecoService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub auth_service: Arc<dyn AuthService>,
    /// Address use cases
    pub endereco_service: Arc<dyn EnderecoService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            endereco_service: container.enderecos(),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        endereco_service: Arc<dyn EnderecoService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            endereco_service,
            database,
        }
    }
}
