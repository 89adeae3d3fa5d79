use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};
use crate::server::{METRIC_OPTION_REJECTED, METRIC_SERVER_CONSTRUCTED};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

/// Register descriptions for the counters emitted by server construction.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_SERVER_CONSTRUCTED,
            Unit::Count,
            "Total number of servers constructed with every option accepted."
        );
        describe_counter!(
            METRIC_OPTION_REJECTED,
            Unit::Count,
            "Total number of construction attempts aborted by a rejected option."
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_telemetry_error() {
        let settings = LoggingSettings::default();
        let _ = init(&settings);

        match init(&settings) {
            Err(InfraError::Telemetry(message)) => {
                assert!(message.contains("failed to install tracing subscriber"));
            }
            other => panic!("expected telemetry error, got {other:?}"),
        }
    }
}
