//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the SeaORM-backed repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{EnderecoRepository, EnderecoStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEnderecoRepository;
