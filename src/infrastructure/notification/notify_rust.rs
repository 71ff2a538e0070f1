//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::Timeout;

use crate::application::ports::{Alert, NotificationError, Notifier};

/// How long auto-hiding alerts stay on screen
const AUTO_HIDE_MS: u32 = 5_000;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: "sdwire-notify".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn alert(&self, alert: &Alert) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let title = alert.title.clone();
        let body = alert.body.clone();
        let icon_name = alert.severity.icon_name().to_string();
        let timeout = if alert.auto_hide {
            Timeout::Milliseconds(AUTO_HIDE_MS)
        } else {
            Timeout::Never
        };

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .icon(&icon_name)
                .timeout(timeout)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
