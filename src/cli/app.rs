//! Main app runner

use std::process::ExitCode;

use tokio::sync::mpsc;

use crate::application::ports::ConfigStore;
use crate::application::{SdwireViewModel, ViewModelRegistry};
use crate::domain::config::AppConfig;
use crate::domain::message::MessageFrame;
use crate::infrastructure::{create_notifier, create_presenter, XdgConfigStore};

use super::args::RunOptions;
use super::feed::run_stdin_feed;
use super::presenter::Presenter;
#[cfg(unix)]
use super::socket::{PushSocketServer, SocketPath};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load config file and merge CLI overrides on top of defaults
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run the push-message loop until the feed ends or Ctrl-C
pub async fn run(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Create UI collaborators and register the view model
    let files = create_presenter(options.plain);
    let notifier = create_notifier(options.notify, &options.app_name);
    let mut registry = ViewModelRegistry::new();
    registry.register(Box::new(SdwireViewModel::new(files, notifier)));

    let (tx, rx) = mpsc::channel::<MessageFrame>(64);

    // Start the inbound feed
    if options.stdin || options.socket.is_none() {
        tokio::spawn(async move {
            if let Err(e) = run_stdin_feed(tx).await {
                eprintln!("Stdin feed error: {}", e);
            }
        });
    } else {
        #[cfg(unix)]
        {
            let socket_path = options
                .socket
                .as_deref()
                .map(SocketPath::with_path)
                .unwrap_or_default();
            let mut server = PushSocketServer::new(socket_path);
            if let Err(e) = server.bind() {
                presenter.error(&format!("Failed to bind socket: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.info(&format!("Listening on {}", server.path().display()));
            tokio::spawn(async move {
                if let Err(e) = server.run(tx).await {
                    eprintln!("Socket feed error: {}", e);
                }
            });
        }
        #[cfg(not(unix))]
        {
            presenter.error("Socket feeds are only supported on Unix; use --stdin");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    dispatch_loop(&registry, rx).await;

    ExitCode::from(EXIT_SUCCESS)
}

/// Deliver frames to the registry in arrival order until the feed ends
async fn dispatch_loop(registry: &ViewModelRegistry, mut rx: mpsc::Receiver<MessageFrame>) {
    loop {
        tokio::select! {
            frame = rx.recv() => {
                match frame {
                    Some(frame) => registry.dispatch(&frame.plugin, &frame.data).await,
                    None => return, // feed ended
                }
            }
            _ = tokio::signal::ctrl_c() => {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::application::PluginMessageHandler;
    use crate::domain::message::PluginMessage;

    struct CountingHandler {
        count: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl PluginMessageHandler for CountingHandler {
        async fn on_plugin_message(&self, _plugin: &str, _message: &PluginMessage) {
            *self.count.lock().unwrap() += 1;
        }
    }

    #[tokio::test]
    async fn dispatch_loop_drains_channel_then_returns() {
        let count = Arc::new(Mutex::new(0));
        let mut registry = ViewModelRegistry::new();
        registry.register(Box::new(CountingHandler {
            count: Arc::clone(&count),
        }));

        let (tx, rx) = mpsc::channel(8);
        for _ in 0..3 {
            tx.send(MessageFrame {
                plugin: "sdwire".to_string(),
                data: PluginMessage::new(),
            })
            .await
            .unwrap();
        }
        drop(tx);

        dispatch_loop(&registry, rx).await;
        assert_eq!(*count.lock().unwrap(), 3);
    }
}
