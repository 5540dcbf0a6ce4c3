//! Repository layer - Data access abstraction
//!
//! Repositories hide SeaORM behind traits so the service layer can be
//! tested against mocks.

pub(crate) mod entities;
mod endereco_repository;

pub use endereco_repository::{EnderecoRepository, EnderecoStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use endereco_repository::MockEnderecoRepository;
