//! Terminal notification adapter for headless use

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{Alert, NotificationError, Notifier, Severity};

/// Notifier that renders alerts to stderr instead of the desktop
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Create a new terminal notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn alert(&self, alert: &Alert) -> Result<(), NotificationError> {
        let marker = match alert.severity {
            Severity::Info => "ℹ".cyan(),
            Severity::Warning => "⚠".yellow(),
            Severity::Error => "✗".red(),
        };
        eprintln!("{} {}: {}", marker, alert.title.bold(), alert.body);
        Ok(())
    }
}
