//! No-op adapter.

use std::fmt;

use crate::logger::{Field, Fields, Logger, Severity};

/// [`Logger`] that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLogger;

impl Logger for DiscardLogger {
    fn with_severity(&self, _severity: Severity) -> Box<dyn Logger> {
        Box::new(DiscardLogger)
    }

    fn attach(self: Box<Self>, _field: Field) -> Box<dyn Logger> {
        self
    }

    fn emit(self: Box<Self>, _args: fmt::Arguments<'_>) {}

    fn with_fields(self: Box<Self>, _fields: Fields) -> Box<dyn Logger> {
        self
    }

    fn box_clone(&self) -> Box<dyn Logger> {
        Box::new(DiscardLogger)
    }

    fn backend(&self) -> &'static str {
        "discard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_chain_is_silent() {
        let logger = DiscardLogger;
        logger
            .error()
            .error_field("err", None)
            .with_fields(Fields::new().string("a", "b"))
            .emit(format_args!("ignored {}", 1));
        assert_eq!(logger.backend(), "discard");
    }
}
