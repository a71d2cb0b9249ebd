//! Shared utilities for integration tests.

use std::io;
use std::sync::Arc;

use cachelog::{RecordLogger, Severity, SharedBuffer, SlogLogger};

pub const PEER: &str = "http://127.0.0.1:8080";

/// Error used by the peer-retrieval scenario.
pub fn test_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "test error")
}

/// Timestamp-free slog root writing into a fresh buffer.
pub fn slog_engine() -> (slog::Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let root = SlogLogger::text_root(buffer.clone(), Severity::Debug, false);
    (root, buffer)
}

/// Timestamp-free env_logger engine writing into a fresh buffer.
pub fn log_engine() -> (Arc<env_logger::Logger>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let engine = RecordLogger::text_engine(buffer.clone(), Severity::Debug, false);
    (Arc::new(engine), buffer)
}
