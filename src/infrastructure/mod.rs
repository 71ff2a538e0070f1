//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! terminal progress rendering, desktop/terminal alerts, and
//! configuration storage.

pub mod config;
pub mod notification;
pub mod progress;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier, TerminalNotifier};
pub use progress::{create_presenter, PlainPresenter, ProgressBarPresenter};
