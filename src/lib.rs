//! Backend-agnostic structured logging for distributed cache peers.
//!
//! ```text
//! cachelog::error()                       // read the active logger once
//!     .error_field("err", Some(&err))     // attach fields
//!     .string_field("key", key)
//!     .emit(format_args!("error retrieving key from peer {}", peer));
//! ```

pub mod backends;
pub mod config;
pub mod global;
pub mod logger;
pub mod output;

pub use backends::{build_logger, build_logger_with_writer, DiscardLogger, RecordLogger, SlogLogger};
pub use config::{load_config, LoggingConfig};
pub use global::{debug, error, info, init, logger, set_boxed_logger, set_logger, warn, LoggerRef};
pub use logger::{Field, FieldValue, Fields, Logger, Severity};
pub use output::SharedBuffer;
