//! HTTP request handlers.

pub mod endereco_handler;

pub use endereco_handler::endereco_routes;
