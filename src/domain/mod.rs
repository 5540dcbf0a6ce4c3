//! Domain layer - Core business entities
//!
//! Holds the address entity and its validated payloads, independent
//! of the ORM models in `infra::repositories::entities`.

pub mod endereco;

pub use endereco::{CreateEndereco, Endereco, UpdateEndereco};
