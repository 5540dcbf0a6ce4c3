//! Application configuration module
//!
//! Environment-driven settings plus the constants shared by the
//! address endpoints (pagination defaults, validation patterns, messages).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
