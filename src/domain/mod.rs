//! Domain layer - Core value objects
//!
//! Contains the push-message value objects, configuration, and domain
//! errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod message;

// Re-export common types
pub use config::AppConfig;
pub use error::ConfigError;
pub use message::{MessageFrame, PluginMessage, SDWIRE_PLUGIN_ID};
