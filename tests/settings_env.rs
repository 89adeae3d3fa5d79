//! Environment layer precedence. These tests mutate process environment
//! variables and therefore run serially.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use hostopt::config::{self, CliArgs, LogFormat};
use hostopt::server::Server;
use serial_test::serial;

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            // SAFETY: tests in this file are serialized and spawn no threads
            // that read the environment.
            unsafe { std::env::remove_var(key) };
        }
    }
}

fn set_env(pairs: &[(&str, &str)]) {
    for (key, value) in pairs {
        // SAFETY: see `EnvGuard`.
        unsafe { std::env::set_var(key, value) };
    }
}

#[test]
#[serial]
fn environment_supplies_server_fields() {
    let _guard = EnvGuard(&["HOSTOPT__SERVER__PORT", "HOSTOPT__SERVER__TIMEOUT_SECONDS"]);
    set_env(&[
        ("HOSTOPT__SERVER__PORT", "7000"),
        ("HOSTOPT__SERVER__TIMEOUT_SECONDS", "5"),
    ]);

    let settings = config::load(&CliArgs::parse_from(["hostopt"])).expect("settings load");
    let server = Server::new(settings.server.options()).expect("valid server");

    assert_eq!(server.port(), 7000);
    assert_eq!(server.timeout(), Duration::from_secs(5));
    assert_eq!(server.host(), "127.0.0.1");
}

#[test]
#[serial]
fn cli_overrides_environment() {
    let _guard = EnvGuard(&["HOSTOPT__SERVER__PORT", "HOSTOPT__LOGGING__JSON"]);
    set_env(&[
        ("HOSTOPT__SERVER__PORT", "7000"),
        ("HOSTOPT__LOGGING__JSON", "true"),
    ]);

    let args = CliArgs::parse_from(["hostopt", "serve", "--server-port", "9000"]);
    let settings = config::load(&args).expect("settings load");

    assert_eq!(settings.server.port, Some(9000));
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn environment_port_is_validated_by_the_builder() {
    let _guard = EnvGuard(&["HOSTOPT__SERVER__PORT"]);
    set_env(&[("HOSTOPT__SERVER__PORT", "99999")]);

    let settings = config::load(&CliArgs::parse_from(["hostopt"])).expect("settings load");
    let err = Server::new(settings.server.options()).expect_err("port out of range");

    assert!(err.to_string().contains("99999"));
}

#[test]
#[serial]
fn environment_overrides_config_file() {
    let _guard = EnvGuard(&["HOSTOPT__SERVER__PORT"]);
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    writeln!(file, "[server]\nhost = \"10.0.0.1\"\nport = 6000").expect("write config");
    set_env(&[("HOSTOPT__SERVER__PORT", "7000")]);

    let args = CliArgs::parse_from([
        "hostopt",
        "--config-file",
        file.path().to_str().expect("utf-8 path"),
    ]);
    let settings = config::load(&args).expect("settings load");

    assert_eq!(settings.server.port, Some(7000));
    assert_eq!(settings.server.host.as_deref(), Some("10.0.0.1"));
}
