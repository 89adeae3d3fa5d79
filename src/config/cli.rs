use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the hostopt binary.
#[derive(Debug, Parser)]
#[command(
    name = "hostopt",
    version,
    about = "Local server built from validated options"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "HOSTOPT_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the server until interrupted.
    Serve(ServeArgs),
    /// Print the character at a position of a string.
    #[command(name = "char-at")]
    CharAt(CharAtArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(ServeArgs::default())
    }
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,

    /// Stop after this many seconds instead of waiting for Ctrl+C.
    #[arg(long = "run-for-seconds", value_name = "SECONDS")]
    pub run_for_seconds: Option<u64>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port (5000-9999).
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u32>,

    /// Override the request timeout.
    #[arg(long = "server-timeout-seconds", value_name = "SECONDS")]
    pub server_timeout_seconds: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Clone)]
pub struct CharAtArgs {
    /// Text to index into.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Zero-based character position.
    #[arg(value_name = "INDEX")]
    pub index: usize,
}
