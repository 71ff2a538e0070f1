//! View-model registry for push-message dispatch

use async_trait::async_trait;

use crate::domain::message::PluginMessage;

/// Handler for inbound plugin push messages
#[async_trait]
pub trait PluginMessageHandler: Send + Sync {
    /// React to one push message.
    ///
    /// # Arguments
    /// * `plugin` - Identifier of the plugin the payload is addressed to
    /// * `message` - The payload itself
    async fn on_plugin_message(&self, plugin: &str, message: &PluginMessage);
}

/// Registry of view models interested in push messages.
///
/// Registration happens explicitly at startup; dispatch delivers each frame
/// to every registered handler in registration order, one at a time, so
/// handlers observe messages in arrival order.
#[derive(Default)]
pub struct ViewModelRegistry {
    handlers: Vec<Box<dyn PluginMessageHandler>>,
}

impl ViewModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view model
    pub fn register(&mut self, handler: Box<dyn PluginMessageHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered view models
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver one message to all registered view models
    pub async fn dispatch(&self, plugin: &str, message: &PluginMessage) {
        for handler in &self.handlers {
            handler.on_plugin_message(plugin, message).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PluginMessageHandler for Recorder {
        async fn on_plugin_message(&self, plugin: &str, _message: &PluginMessage) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, plugin));
        }
    }

    #[tokio::test]
    async fn dispatch_reaches_all_handlers_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ViewModelRegistry::new();
        registry.register(Box::new(Recorder {
            name: "first",
            log: Arc::clone(&log),
        }));
        registry.register(Box::new(Recorder {
            name: "second",
            log: Arc::clone(&log),
        }));

        registry.dispatch("sdwire", &PluginMessage::new()).await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:sdwire".to_string(), "second:sdwire".to_string()]
        );
    }

    #[tokio::test]
    async fn empty_registry_dispatch_is_a_noop() {
        let registry = ViewModelRegistry::new();
        assert!(registry.is_empty());
        registry.dispatch("sdwire", &PluginMessage::new()).await;
    }
}
