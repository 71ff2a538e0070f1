//! Application layer - View models and port interfaces
//!
//! Contains the push-message handling logic and trait definitions
//! for external system interactions.

pub mod ports;
pub mod registry;
pub mod view_model;

// Re-export common types
pub use registry::{PluginMessageHandler, ViewModelRegistry};
pub use view_model::{SdwireViewModel, ERROR_ALERT_TITLE};
