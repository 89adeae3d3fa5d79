//! Server construction through ordered, validated options.
//!
//! ```
//! use std::time::Duration;
//!
//! use hostopt::server::{Server, with_port, with_timeout};
//!
//! let server = Server::new([with_timeout(Duration::from_secs(5)), with_port(7000)])?;
//! assert_eq!(server.addr(), "127.0.0.1:7000");
//! assert_eq!(server.timeout(), Duration::from_secs(5));
//! # Ok::<(), hostopt::server::OptionError>(())
//! ```

pub mod config;
pub mod error;
pub mod infra;
pub mod server;
pub mod text;
