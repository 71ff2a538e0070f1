//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the push-message
//! feeds, and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod feed;
pub mod presenter;
#[cfg(unix)]
pub mod socket;

// Re-export commonly used types
pub use app::{load_merged_config, run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RunOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
