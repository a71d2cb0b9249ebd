//! Process-wide active logger.
//!
//! # Responsibilities
//! - Hold the logger every host call site reads
//! - Swap it atomically at registration time
//!
//! # Design Decisions
//! - `ArcSwap` gives lock-free reads; a reader racing a swap sees either the
//!   old or the new logger, never a partial one
//! - Call sites load the slot once per statement; the chain that follows
//!   owns its severity and fields, so a later swap does not affect it
//! - Defaults to the built form of `LoggingConfig::default()`
//!   (slog, stderr, `Info`)

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::backends::build_logger;
use crate::config::{validate_config, ConfigError, ConfigResult, LoggingConfig};
use crate::logger::Logger;

static ACTIVE_LOGGER: LazyLock<ArcSwap<Box<dyn Logger>>> =
    LazyLock::new(|| ArcSwap::from_pointee(build_logger(&LoggingConfig::default())));

/// Snapshot of the active logger taken by one atomic load.
#[derive(Clone)]
pub struct LoggerRef(Arc<Box<dyn Logger>>);

impl Deref for LoggerRef {
    type Target = dyn Logger;

    fn deref(&self) -> &Self::Target {
        &**self.0
    }
}

impl fmt::Debug for LoggerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LoggerRef").field(&self.backend()).finish()
    }
}

/// The currently registered logger.
pub fn logger() -> LoggerRef {
    LoggerRef(ACTIVE_LOGGER.load_full())
}

/// Register `logger` for all subsequent log statements.
///
/// Returns the logger it replaced.
pub fn set_logger<L>(logger: L) -> LoggerRef
where
    L: Logger + 'static,
{
    set_boxed_logger(Box::new(logger))
}

/// Boxed form of [`set_logger`].
pub fn set_boxed_logger(logger: Box<dyn Logger>) -> LoggerRef {
    let backend = logger.backend();
    let previous = LoggerRef(ACTIVE_LOGGER.swap(Arc::new(logger)));
    tracing::debug!(
        previous = previous.backend(),
        current = backend,
        "Active logger replaced"
    );
    previous
}

/// Validate `config`, build its logger and register it.
pub fn init(config: &LoggingConfig) -> ConfigResult<LoggerRef> {
    validate_config(config).map_err(ConfigError::Validation)?;
    Ok(set_boxed_logger(build_logger(config)))
}

/// Active logger at `Debug`.
pub fn debug() -> Box<dyn Logger> {
    logger().debug()
}

/// Active logger at `Info`.
pub fn info() -> Box<dyn Logger> {
    logger().info()
}

/// Active logger at `Warn`.
pub fn warn() -> Box<dyn Logger> {
    logger().warn()
}

/// Active logger at `Error`.
pub fn error() -> Box<dyn Logger> {
    logger().error()
}
