//! The `Server` record and its construction through ordered options.

use std::time::Duration;

use metrics::counter;
use tracing::{debug, info, warn};

mod error;
mod options;

pub use error::OptionError;
pub use options::{PORT_RANGE, ServerOption, with_host, with_port, with_timeout};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

pub const METRIC_SERVER_CONSTRUCTED: &str = "hostopt_server_constructed_total";
pub const METRIC_OPTION_REJECTED: &str = "hostopt_option_rejected_total";

/// A local server description. Fields are only written while options are
/// applied inside [`Server::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    host: String,
    port: u16,
    timeout: Duration,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Server {
    /// Build a server from the defaults, then apply `options` in order.
    ///
    /// The first rejected option aborts construction and its error is
    /// returned unchanged; options after it are never applied. Mutations made
    /// by earlier options are discarded together with the target.
    pub fn new<I>(options: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = ServerOption>,
    {
        let mut server = Self::default();

        for option in options {
            let name = option.name();
            if let Err(err) = option.apply(&mut server) {
                warn!(
                    target = "hostopt::server",
                    option = name,
                    error = %err,
                    "option rejected"
                );
                counter!(METRIC_OPTION_REJECTED, "option" => name).increment(1);
                return Err(err);
            }
            debug!(target = "hostopt::server", option = name, "option applied");
        }

        counter!(METRIC_SERVER_CONSTRUCTED).increment(1);
        Ok(server)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `host:port`, as printed in lifecycle logs.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn run(&self) {
        info!(
            target = "hostopt::server",
            addr = %self.addr(),
            timeout = ?self.timeout,
            "server running"
        );
    }

    pub fn stop(&self) {
        info!(target = "hostopt::server", addr = %self.addr(), "server stopped");
    }
}
