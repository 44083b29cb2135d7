//! Subscriber setup for the cqlprim tools

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

/// Install the global subscriber: formatted events on stderr, filtered by level.
pub fn init_logging(config: &LoggingConfig) {
    let formatting_layer = fmt::layer()
        .with_ansi(config.ansi)
        .with_level(true)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr);

    let filter_layer = tracing_subscriber::filter::LevelFilter::from_level(config.level);

    tracing_subscriber::registry()
        .with(formatting_layer)
        .with(filter_layer)
        .init();
}
