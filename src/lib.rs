//! Endereço API - address records linked to clients, served over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve` and `migrate` entry points
//! - **config**: environment configuration and constants
//! - **domain**: the address entity and its payloads
//! - **services**: use cases and database error translation
//! - **infra**: SeaORM entities, repositories and migrations
//! - **api**: handlers, JWT middleware and routes
//! - **types**: pagination and response envelopes
//! - **errors**: centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateEndereco, Endereco, UpdateEndereco};
pub use errors::{AppError, AppResult};
