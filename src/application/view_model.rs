//! Sdwire push-message view model

use async_trait::async_trait;

use crate::domain::message::{PluginMessage, SDWIRE_PLUGIN_ID};

use super::ports::{Alert, FileListPresenter, Notifier};
use super::registry::PluginMessageHandler;

/// Title of the alert raised for server-reported errors
pub const ERROR_ALERT_TITLE: &str = "Sdwire Error";

const ERROR_ALERT_LEAD: &str = "Looks like your settings are not correct or there was an error.";

/// View model bridging Sdwire push messages to the UI collaborators.
///
/// Holds its two collaborators by reference only: it never mutates the
/// incoming payload and keeps no state between messages. Messages addressed
/// to other plugins are ignored.
pub struct SdwireViewModel<P, N>
where
    P: FileListPresenter,
    N: Notifier,
{
    files: P,
    notifier: N,
}

impl<P, N> SdwireViewModel<P, N>
where
    P: FileListPresenter,
    N: Notifier,
{
    /// Create a new view model with its injected collaborators
    pub fn new(files: P, notifier: N) -> Self {
        Self { files, notifier }
    }

    /// Handle one inbound push message.
    ///
    /// `progress` is forwarded to the file-list presenter first; `error`
    /// raises an auto-hiding alert and ends processing of the message.
    /// A payload carrying both fields therefore produces both side effects,
    /// progress first (kept for compatibility with the server plugin's
    /// existing consumers). Collaborator failures are not this view model's
    /// concern and are discarded.
    pub async fn handle_message(&self, plugin: &str, message: &PluginMessage) {
        if plugin != SDWIRE_PLUGIN_ID {
            return;
        }

        if let Some(progress) = message.progress() {
            let label = format!("Uploading to sdwire - {}%...", progress);
            let _ = self.files.set_progress(progress, &label, false).await;
        }

        if let Some(error) = message.error() {
            let alert = Alert::error(
                ERROR_ALERT_TITLE,
                format!("{}\n\n{}", ERROR_ALERT_LEAD, error),
            );
            let _ = self.notifier.alert(&alert).await;
        }
    }
}

#[async_trait]
impl<P, N> PluginMessageHandler for SdwireViewModel<P, N>
where
    P: FileListPresenter,
    N: Notifier,
{
    async fn on_plugin_message(&self, plugin: &str, message: &PluginMessage) {
        self.handle_message(plugin, message).await;
    }
}
