//! Lazy-event adapter over the `log` facade.
//!
//! # Responsibilities
//! - Hold a pending event (severity + fields) per chain value
//! - Build one `log::Record` with the fields as key-values on emission
//! - Hand the record to any `log::Log` engine (env_logger by default)
//!
//! # Design Decisions
//! - Severity selection starts a fresh event, seeded with a copy of the
//!   fields attached so far
//! - Attachment appends to the event in place: the boxed value owning it is
//!   consumed by the call, so no sibling can observe the change
//! - The engine handle is shared, never closed

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use log::kv::{self, Key, Source, ToValue, Value, VisitSource};
use log::Log;

use crate::logger::{Field, FieldValue, Fields, Logger, Severity};

impl ToValue for FieldValue {
    fn to_value(&self) -> Value<'_> {
        Value::from(self.as_str())
    }
}

impl Source for Fields {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for field in self {
            visitor.visit_pair(Key::from(field.label.as_str()), field.value.to_value())?;
        }
        Ok(())
    }
}

/// Message being assembled.
#[derive(Debug, Clone)]
struct Event {
    level: Severity,
    fields: Fields,
}

/// [`Logger`] that emits through a `log::Log` engine.
#[derive(Clone)]
pub struct RecordLogger {
    engine: Arc<dyn Log>,
    target: Arc<str>,
    event: Event,
}

impl RecordLogger {
    /// Wrap `engine`, tagging every record with `target`.
    pub fn new(engine: Arc<dyn Log>, target: impl Into<String>) -> Self {
        Self {
            engine,
            target: Arc::from(target.into()),
            event: Event {
                level: Severity::Info,
                fields: Fields::new(),
            },
        }
    }

    /// Wrap the logger installed with `log::set_logger`.
    pub fn global(target: impl Into<String>) -> Self {
        Self::new(Arc::new(GlobalLog), target)
    }

    /// Fields carried by every line emitted through this logger.
    pub fn with_context(mut self, context: Fields) -> Self {
        self.event.fields.extend(context);
        self
    }

    /// env_logger engine writing plain text to `writer`.
    ///
    /// Records below `min_level` are filtered out by the engine.
    pub fn text_engine<W>(writer: W, min_level: Severity, timestamps: bool) -> env_logger::Logger
    where
        W: Write + Send + 'static,
    {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(log::Level::from(min_level).to_level_filter())
            .format_target(false)
            .format_module_path(false)
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Pipe(Box::new(writer)));
        if !timestamps {
            builder.format_timestamp(None);
        }
        builder.build()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Severity the next record will carry.
    pub fn level(&self) -> Severity {
        self.event.level
    }
}

impl Logger for RecordLogger {
    fn with_severity(&self, severity: Severity) -> Box<dyn Logger> {
        Box::new(Self {
            engine: Arc::clone(&self.engine),
            target: Arc::clone(&self.target),
            event: Event {
                level: severity,
                fields: self.event.fields.clone(),
            },
        })
    }

    fn attach(mut self: Box<Self>, field: Field) -> Box<dyn Logger> {
        self.event.fields.insert(field);
        self
    }

    fn emit(self: Box<Self>, args: fmt::Arguments<'_>) {
        let RecordLogger {
            engine,
            target,
            event,
        } = *self;
        engine.log(
            &log::Record::builder()
                .level(event.level.into())
                .target(&target)
                .args(args)
                .key_values(&event.fields)
                .build(),
        );
    }

    fn with_fields(mut self: Box<Self>, fields: Fields) -> Box<dyn Logger> {
        self.event.fields.extend(fields);
        self
    }

    fn box_clone(&self) -> Box<dyn Logger> {
        Box::new(self.clone())
    }

    fn backend(&self) -> &'static str {
        "log"
    }
}

/// Forwards to whatever `log::logger()` currently returns.
///
/// Records above the facade's static or runtime maximum are dropped here,
/// the same gate the `log!` macros apply before reaching the logger.
struct GlobalLog;

fn facade_admits(level: log::Level) -> bool {
    level <= log::STATIC_MAX_LEVEL && level <= log::max_level()
}

impl Log for GlobalLog {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        facade_admits(metadata.level()) && log::logger().enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if facade_admits(record.level()) {
            log::logger().log(record)
        }
    }

    fn flush(&self) {
        log::logger().flush()
    }
}
