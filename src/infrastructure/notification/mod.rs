//! Notification infrastructure module
//!
//! Provides cross-platform desktop notifications using notify-rust,
//! with a terminal fallback for headless use.

mod notify_rust;
mod terminal;

pub use self::notify_rust::NotifyRustNotifier;
pub use terminal::TerminalNotifier;

use crate::application::ports::Notifier;

/// Create the notifier for the requested mode
pub fn create_notifier(desktop: bool, app_name: &str) -> Box<dyn Notifier> {
    if desktop {
        Box::new(NotifyRustNotifier::with_app_name(app_name))
    } else {
        Box::new(TerminalNotifier::new())
    }
}
