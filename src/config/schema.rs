//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::logger::Severity;
use crate::output::OutputKind;

/// Root logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Engine that writes the lines.
    pub backend: BackendKind,

    /// Lines below this severity are dropped by the engine.
    pub level: Severity,

    /// Standard stream the engine writes to.
    pub output: OutputKind,

    /// Prefix each line with a timestamp.
    pub timestamps: bool,

    /// Record target (used by the `log` backend).
    pub target: String,

    /// Fields attached to every line.
    pub context: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            level: Severity::Info,
            output: OutputKind::Stderr,
            timestamps: true,
            target: "groupcache".to_string(),
            context: BTreeMap::new(),
        }
    }
}

/// Available logging engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// `slog` with a plain-text `slog-term` drain.
    #[default]
    Slog,
    /// The `log` facade with an `env_logger` engine.
    Log,
    /// Drop everything.
    Discard,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slog => "slog",
            Self::Log => "log",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
