//! Setup logging subsystem.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config;

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("A global subscriber has already been installed")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Setup logging sub-system specifying the logging configuration and a list of external crates
/// for which a more verbose logging must be enabled. The normalization crates are always
/// considered for verbose logging.
pub fn setup(
    config: &config::Log,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();

    let console_layer = if config.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter_directive = config
            .console
            .filtering_directive
            .clone()
            .unwrap_or_else(|| {
                get_envfilter_directive(
                    tracing::Level::WARN,
                    config.console.level.into_level(),
                    crates_to_filter.as_ref(),
                )
            });
        let console_filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .parse_lossy(console_filter_directive);

        let layer = match config.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_span_events(fmt::format::FmtSpan::CLOSE)
                .with_writer(console_writer)
                .boxed(),
            config::LogFormat::Json => {
                // Disable color or emphasis related ANSI escape codes for JSON formats
                error_stack::Report::set_color_mode(error_stack::fmt::ColorMode::None);

                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(console_writer)
                    .boxed()
            }
        };
        Some(layer.with_filter(console_filter))
    } else {
        None
    };

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::info!(
        console_enabled = config.console.enabled,
        "Logging subsystem initialized"
    );

    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

const NORMALIZATION_CRATES: [&str; 6] = [
    "ucs_common_enums",
    "ucs_common_utils",
    "ucs_cards",
    "domain_types",
    "interfaces",
    "gateway_integration",
];

fn get_envfilter_directive(
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: &[&'static str],
) -> String {
    NORMALIZATION_CRATES
        .iter()
        .chain(crates_to_filter)
        .map(|crate_name| format!("{}={filter_log_level}", crate_name.replace('-', "_")))
        .fold(vec![default_log_level.to_string()], |mut directives, directive| {
            directives.push(directive);
            directives
        })
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envfilter_directive_lists_workspace_and_extra_crates() {
        let directive =
            get_envfilter_directive(tracing::Level::WARN, tracing::Level::DEBUG, &["my-host"]);

        assert!(directive.starts_with("WARN,"));
        assert!(directive.contains("gateway_integration=DEBUG"));
        assert!(directive.contains("ucs_cards=DEBUG"));
        assert!(directive.ends_with("my_host=DEBUG"));
    }
}
