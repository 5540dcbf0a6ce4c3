//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository and verifier traits, so handlers and
//! tests can swap in mocks.

mod auth_service;
pub mod container;
mod endereco_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Claims, JwtVerifier};
pub use endereco_service::{EnderecoManager, EnderecoService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
