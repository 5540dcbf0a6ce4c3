//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{AuthService, EnderecoManager, EnderecoService, JwtVerifier};
use crate::config::Config;
use crate::infra::EnderecoStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get token verification service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get address service
    fn enderecos(&self) -> Arc<dyn EnderecoService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    endereco_service: Arc<dyn EnderecoService>,
}

impl Services {
    /// Wire the SeaORM store and JWT verifier from a live connection
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let repo = Arc::new(EnderecoStore::new(db));
        let endereco_service = Arc::new(EnderecoManager::new(repo, config.default_page_limit));
        let auth_service = Arc::new(JwtVerifier::new(config));

        Self {
            auth_service,
            endereco_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn enderecos(&self) -> Arc<dyn EnderecoService> {
        self.endereco_service.clone()
    }
}
