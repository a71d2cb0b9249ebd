//! Eager-attachment adapter over `slog`.
//!
//! # Responsibilities
//! - Carry attached fields as a chain of child `slog::Logger`s
//! - Track the selected severity beside the context
//! - Emit through the registered root's drain
//!
//! # Design Decisions
//! - Every attachment derives a new child; the parent is never touched
//! - A repeated label rebuilds the context from the root so only the last
//!   value is rendered
//! - Records are built directly instead of through slog's macros, which
//!   would compile out levels above slog's static maximum

use std::fmt;
use std::io::{self, Write};

use slog::{Drain, Key, OwnedKV, SingleKV};

use crate::logger::{Field, FieldValue, Fields, Logger, Severity};

static LOCATION: slog::RecordLocation = slog::RecordLocation {
    file: file!(),
    line: line!(),
    column: column!(),
    function: "",
    module: module_path!(),
};

impl slog::Value for FieldValue {
    fn serialize(
        &self,
        _record: &slog::Record<'_>,
        key: Key,
        serializer: &mut dyn slog::Serializer,
    ) -> slog::Result {
        serializer.emit_str(key, self.as_str())
    }
}

/// [`Logger`] backed by a `slog::Logger`.
#[derive(Clone)]
pub struct SlogLogger {
    /// Logger as registered by the host, including its own context.
    root: slog::Logger,
    /// `root` plus one child per attached field.
    context: slog::Logger,
    fields: Fields,
    level: Severity,
}

impl SlogLogger {
    /// Wrap a host logger. Lines default to `Info` until a severity is chosen.
    pub fn new(root: slog::Logger) -> Self {
        Self {
            context: root.clone(),
            root,
            fields: Fields::new(),
            level: Severity::Info,
        }
    }

    /// Plain-text root logger writing to `writer`.
    ///
    /// Lines below `min_level` are dropped by the drain; write errors are
    /// discarded.
    pub fn text_root<W>(writer: W, min_level: Severity, timestamps: bool) -> slog::Logger
    where
        W: Write + Send + 'static,
    {
        let decorator = slog_term::PlainSyncDecorator::new(writer);
        let mut format = slog_term::FullFormat::new(decorator);
        if !timestamps {
            format = format.use_custom_timestamp(no_timestamp);
        }
        let drain = format
            .build()
            .filter_level(min_level.into())
            .ignore_res();
        slog::Logger::root(drain, slog::o!())
    }

    /// Fields carried by every line emitted through this logger.
    ///
    /// They are tracked like attached fields, so a later attachment with the
    /// same label replaces them.
    pub fn with_context(mut self, context: Fields) -> Self {
        for field in context {
            self.push(field);
        }
        self
    }

    /// Severity the next line will be written at.
    pub fn level(&self) -> Severity {
        self.level
    }

    fn child(parent: &slog::Logger, field: &Field) -> slog::Logger {
        parent.new(OwnedKV(SingleKV(
            Key::from(field.label.clone()),
            field.value.clone(),
        )))
    }

    fn push(&mut self, field: Field) {
        if self.fields.contains(&field.label) {
            self.fields.insert(field);
            self.context = self
                .fields
                .iter()
                .fold(self.root.clone(), |parent, f| Self::child(&parent, f));
        } else {
            self.context = Self::child(&self.context, &field);
            self.fields.insert(field);
        }
    }
}

impl From<slog::Logger> for SlogLogger {
    fn from(root: slog::Logger) -> Self {
        Self::new(root)
    }
}

impl Logger for SlogLogger {
    fn with_severity(&self, severity: Severity) -> Box<dyn Logger> {
        Box::new(Self {
            level: severity,
            ..self.clone()
        })
    }

    fn attach(mut self: Box<Self>, field: Field) -> Box<dyn Logger> {
        self.push(field);
        self
    }

    fn emit(self: Box<Self>, args: fmt::Arguments<'_>) {
        let record_static = slog::RecordStatic {
            location: &LOCATION,
            tag: "",
            level: self.level.into(),
        };
        self.context
            .log(&slog::Record::new(&record_static, &args, slog::BorrowedKV(&())));
    }

    fn with_fields(mut self: Box<Self>, fields: Fields) -> Box<dyn Logger> {
        for field in fields {
            self.push(field);
        }
        self
    }

    fn box_clone(&self) -> Box<dyn Logger> {
        Box::new(self.clone())
    }

    fn backend(&self) -> &'static str {
        "slog"
    }
}

fn no_timestamp(_: &mut dyn Write) -> io::Result<()> {
    Ok(())
}
