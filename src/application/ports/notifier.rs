//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
        }
    }
}

/// A user-visible, dismissible alert
#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: Severity,
    pub title: String,
    pub body: String,
    /// Whether the alert dismisses itself after a short time
    pub auto_hide: bool,
}

impl Alert {
    /// Create an auto-hiding error alert
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            body: body.into(),
            auto_hide: true,
        }
    }
}

/// Port for user-visible alerts
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a dismissible alert.
    ///
    /// # Arguments
    /// * `alert` - The alert to display
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn alert(&self, alert: &Alert) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn alert(&self, alert: &Alert) -> Result<(), NotificationError> {
        self.as_ref().alert(alert).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_alert_auto_hides() {
        let alert = Alert::error("Sdwire Error", "boom");
        assert_eq!(alert.severity, Severity::Error);
        assert!(alert.auto_hide);
    }

    #[test]
    fn severity_icon_names() {
        assert_eq!(Severity::Error.icon_name(), "dialog-error");
        assert_eq!(Severity::Info.icon_name(), "dialog-information");
    }
}
