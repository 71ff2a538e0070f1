//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unix socket to listen on for push messages
    pub socket: Option<String>,
    /// Whether to show desktop notifications for errors
    pub notify: Option<bool>,
    /// Whether to print progress as plain lines instead of a bar
    pub plain: Option<bool>,
    /// Application name used on desktop notifications
    pub app_name: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            socket: None,
            notify: Some(true),
            plain: Some(false),
            app_name: Some("sdwire-notify".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            socket: other.socket.or(self.socket),
            notify: other.notify.or(self.notify),
            plain: other.plain.or(self.plain),
            app_name: other.app_name.or(self.app_name),
        }
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get plain setting, or false if not set
    pub fn plain_or_default(&self) -> bool {
        self.plain.unwrap_or(false)
    }

    /// Get app name, or the binary name if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or("sdwire-notify")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            socket: Some("/run/a.sock".into()),
            notify: Some(true),
            plain: None,
            app_name: None,
        };
        let over = AppConfig {
            socket: Some("/run/b.sock".into()),
            notify: None,
            plain: Some(true),
            app_name: None,
        };

        let merged = base.merge(over);
        assert_eq!(merged.socket.as_deref(), Some("/run/b.sock"));
        assert_eq!(merged.notify, Some(true));
        assert_eq!(merged.plain, Some(true));
    }

    #[test]
    fn merge_keeps_base_when_other_empty() {
        let base = AppConfig::defaults();
        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged.notify, base.notify);
        assert_eq!(merged.app_name, base.app_name);
    }

    #[test]
    fn defaults_enable_notifications() {
        let config = AppConfig::defaults();
        assert!(config.notify_or_default());
        assert!(!config.plain_or_default());
        assert_eq!(config.app_name_or_default(), "sdwire-notify");
    }
}
