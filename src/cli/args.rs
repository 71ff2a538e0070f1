//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// sdwire-notify - Desktop companion for the OctoPrint Sdwire plugin
#[derive(Parser, Debug)]
#[command(name = "sdwire-notify")]
#[command(version)]
#[command(about = "Mirrors Sdwire upload progress and errors into a progress bar and notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Unix socket to listen on for push messages
    #[arg(short = 's', long, value_name = "PATH")]
    pub socket: Option<String>,

    /// Read push messages from stdin instead of a socket
    #[arg(long, conflicts_with = "socket")]
    pub stdin: bool,

    /// Print errors to the terminal instead of desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Print progress as plain lines instead of an animated bar
    #[arg(short = 'p', long)]
    pub plain: bool,

    /// Application name shown on desktop notifications
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed run options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub socket: Option<String>,
    pub stdin: bool,
    pub notify: bool,
    pub plain: bool,
    pub app_name: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["socket", "notify", "plain", "app_name"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["sdwire-notify"]);
        assert!(cli.socket.is_none());
        assert!(!cli.stdin);
        assert!(!cli.no_notify);
        assert!(!cli.plain);
        assert!(cli.app_name.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["sdwire-notify", "--stdin", "--plain", "--no-notify"]);
        assert!(cli.stdin);
        assert!(cli.plain);
        assert!(cli.no_notify);
    }

    #[test]
    fn stdin_conflicts_with_socket() {
        let result = Cli::try_parse_from(["sdwire-notify", "--stdin", "--socket", "/tmp/x.sock"]);
        assert!(result.is_err());
    }

    #[test]
    fn valid_keys() {
        assert!(is_valid_config_key("socket"));
        assert!(is_valid_config_key("notify"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
