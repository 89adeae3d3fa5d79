//! Named option constructors, one per configurable `Server` field.
//!
//! Every constructor captures a single typed value and defers validation
//! until the option is applied by [`Server::new`](super::Server::new). A
//! rejected value leaves the target untouched.

use std::{fmt, ops::Range, time::Duration};

use super::{OptionError, Server};

/// Ports accepted by [`with_port`].
pub const PORT_RANGE: Range<u16> = 5000..10000;

type ApplyFn = Box<dyn FnOnce(&mut Server) -> Result<(), OptionError> + Send>;

/// A deferred, validated mutation applied to a [`Server`] during construction.
pub struct ServerOption {
    name: &'static str,
    apply: ApplyFn,
}

impl ServerOption {
    /// Wrap an arbitrary mutation. `name` identifies the option in logs and
    /// metrics.
    pub fn new<F>(name: &'static str, apply: F) -> Self
    where
        F: FnOnce(&mut Server) -> Result<(), OptionError> + Send + 'static,
    {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn apply(self, server: &mut Server) -> Result<(), OptionError> {
        (self.apply)(server)
    }
}

impl fmt::Debug for ServerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Listen port. Must fall within [`PORT_RANGE`].
pub fn with_port(port: u32) -> ServerOption {
    ServerOption::new("port", move |server| {
        let accepted = u16::try_from(port)
            .ok()
            .filter(|candidate| PORT_RANGE.contains(candidate))
            .ok_or_else(|| {
                OptionError::invalid_value(
                    "port",
                    port,
                    format!(
                        "port must be between {} and {}",
                        PORT_RANGE.start,
                        PORT_RANGE.end - 1
                    ),
                )
            })?;
        server.port = accepted;
        Ok(())
    })
}

/// Request timeout. Must be greater than zero.
pub fn with_timeout(timeout: Duration) -> ServerOption {
    ServerOption::new("timeout", move |server| {
        if timeout.is_zero() {
            return Err(OptionError::invalid_value(
                "timeout",
                format!("{timeout:?}"),
                "must be greater than zero",
            ));
        }
        server.timeout = timeout;
        Ok(())
    })
}

/// Listen host. Surrounding whitespace is trimmed; the result must not be empty.
pub fn with_host(host: impl Into<String>) -> ServerOption {
    let host = host.into();
    ServerOption::new("host", move |server| {
        let trimmed = host.trim();
        if trimmed.is_empty() {
            return Err(OptionError::invalid_value(
                "host",
                host.as_str(),
                "host must not be empty",
            ));
        }
        server.host = trimmed.to_string();
        Ok(())
    })
}
