//! The logging capability set.
//!
//! # Data Flow
//! ```text
//! slot / registered logger
//!     → severity selector (&self, fresh value)
//!     → field attachment (consumes, returns new value) ...
//!     → emit (consumes, writes one line through the engine)
//! ```
//!
//! # Design Decisions
//! - Severity selection borrows, so one parent can fan out into siblings
//! - Field attachment and emission move the boxed value: adapters may mutate
//!   their event state in place without any sibling being able to see it
//! - Branching an in-progress chain is explicit through `Clone`
//! - Nothing here returns an error; engine failures stay inside the engine

mod field;
mod severity;

pub use field::{Field, FieldValue, Fields, NIL_ERROR};
pub use severity::{ParseSeverityError, Severity};

use std::error::Error as StdError;
use std::fmt;

/// Leveled, field-annotated logging over an arbitrary engine.
pub trait Logger: Send + Sync {
    /// Select `severity` for the next line, keeping attached fields.
    fn with_severity(&self, severity: Severity) -> Box<dyn Logger>;

    /// Attach one field. A label that is already attached is overwritten.
    fn attach(self: Box<Self>, field: Field) -> Box<dyn Logger>;

    /// Format `args` and write one line at the selected severity.
    fn emit(self: Box<Self>, args: fmt::Arguments<'_>);

    /// Attach a batch, equivalent to attaching each field in order.
    fn with_fields(self: Box<Self>, fields: Fields) -> Box<dyn Logger>;

    fn box_clone(&self) -> Box<dyn Logger>;

    /// Short name of the wrapped engine.
    fn backend(&self) -> &'static str;

    fn debug(&self) -> Box<dyn Logger> {
        self.with_severity(Severity::Debug)
    }

    fn info(&self) -> Box<dyn Logger> {
        self.with_severity(Severity::Info)
    }

    fn warn(&self) -> Box<dyn Logger> {
        self.with_severity(Severity::Warn)
    }

    fn error(&self) -> Box<dyn Logger> {
        self.with_severity(Severity::Error)
    }

    fn string_field(self: Box<Self>, label: &str, value: &str) -> Box<dyn Logger> {
        self.attach(Field::string(label, value))
    }

    /// Attach an error. `None` is rendered as [`NIL_ERROR`].
    fn error_field(self: Box<Self>, label: &str, err: Option<&dyn StdError>) -> Box<dyn Logger> {
        self.attach(Field::error(label, err))
    }

    /// Emit a message that needs no formatting.
    fn print(self: Box<Self>, message: &str) {
        self.emit(format_args!("{}", message))
    }
}

impl Clone for Box<dyn Logger> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
