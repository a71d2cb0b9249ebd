//! Logger implementations and the factory that builds them from config.
//!
//! # Adapters
//! - `SlogLogger`: eager attachment, one child `slog::Logger` per field
//! - `RecordLogger`: lazy event, one `log::Record` per line
//! - `DiscardLogger`: drops everything

mod discard;
mod log_adapter;
mod slog_adapter;

pub use discard::DiscardLogger;
pub use log_adapter::RecordLogger;
pub use slog_adapter::SlogLogger;

use std::io::Write;
use std::sync::Arc;

use crate::config::{BackendKind, LoggingConfig};
use crate::logger::{Fields, Logger};

/// Build the logger described by `config`, writing to its configured stream.
pub fn build_logger(config: &LoggingConfig) -> Box<dyn Logger> {
    build_logger_with_writer(config, config.output.writer())
}

/// Build the logger described by `config`, writing to `writer`.
///
/// `config.output` is ignored. The config is assumed to be validated.
pub fn build_logger_with_writer<W>(config: &LoggingConfig, writer: W) -> Box<dyn Logger>
where
    W: Write + Send + 'static,
{
    let context: Fields = config
        .context
        .iter()
        .map(|(label, value)| (label.as_str(), value.as_str()))
        .collect();

    match config.backend {
        BackendKind::Slog => {
            let root = SlogLogger::text_root(writer, config.level, config.timestamps);
            Box::new(SlogLogger::new(root).with_context(context))
        }
        BackendKind::Log => {
            let engine = RecordLogger::text_engine(writer, config.level, config.timestamps);
            Box::new(RecordLogger::new(Arc::new(engine), config.target.clone()).with_context(context))
        }
        BackendKind::Discard => Box::new(DiscardLogger),
    }
}
