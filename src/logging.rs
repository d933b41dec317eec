//! Logger setup for the command-line front end.
//!
//! The library only talks to the `log` facade: one `debug!` line per built
//! record, one `warn!` per diagnostic and an `info!` summary per import.
//! Binaries call [`init_logging`] once, early in `main`.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for domcanvas front ends.
///
/// With the stock settings only diagnostics (warn) reach stderr, without
/// timestamps, so CLI output stays short and diffable.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit `env_logger` filter, e.g. "domcanvas=debug". Wins over
    /// `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    /// Prefix each line with a timestamp.
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Warn,
            timestamps: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Spec(String),
    Level(LevelFilter),
}

fn filter_source(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    match (&config.env_filter, rust_log) {
        (Some(filter), _) => FilterSource::Spec(filter.clone()),
        (None, Some(filter)) if !filter.trim().is_empty() => FilterSource::Spec(filter),
        _ => FilterSource::Level(config.default_level),
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect, and a
/// logger installed elsewhere is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter_source(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Spec(filter) => builder.parse_filters(&filter),
            FilterSource::Level(level) => builder.filter_level(level),
        };

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
