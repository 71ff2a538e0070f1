//! sdwire-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use sdwire_notify::cli::{
    app::{load_merged_config, run, EXIT_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use sdwire_notify::domain::config::AppConfig;
use sdwire_notify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        socket: cli.socket.clone(),
        notify: if cli.no_notify { Some(false) } else { None },
        plain: if cli.plain { Some(true) } else { None },
        app_name: cli.app_name.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = RunOptions {
        socket: config.socket.clone(),
        stdin: cli.stdin,
        notify: config.notify_or_default(),
        plain: config.plain_or_default(),
        app_name: config.app_name_or_default().to_string(),
    };

    run(options).await
}
