//! Per-trial trace output, toggled from the environment or set explicitly.

use std::env;
use std::sync::{Arc, Mutex, OnceLock};

/// Environment variable that turns trace mode on for the free-function runners
pub const TRACE_ENV_VAR: &str = "QUICKPROP_TRACE";

/// Longest serialized value shown in a trace line before it is cut
pub const TRACE_VALUE_LIMIT: usize = 20;

const ELLIPSIS: char = '…';

/// Shared in-memory destination for trace lines
pub type TraceBuffer = Arc<Mutex<Vec<String>>>;

/// Where trace lines go
#[derive(Debug, Clone, Default)]
pub enum TraceSink {
    /// One line per trial on standard error
    #[default]
    Stderr,
    /// A `debug` record on the `quickprop::trace` log target
    Log,
    /// Appended to a shared buffer
    Memory(TraceBuffer),
}

impl TraceSink {
    /// A fresh in-memory sink and a handle for reading back what it collects
    pub fn memory() -> (Self, TraceBuffer) {
        let buffer = TraceBuffer::default();
        (TraceSink::Memory(Arc::clone(&buffer)), buffer)
    }

    fn write(&self, line: String) {
        match self {
            TraceSink::Stderr => eprintln!("{}", line),
            TraceSink::Log => log::debug!(target: "quickprop::trace", "{}", line),
            TraceSink::Memory(buffer) => match buffer.lock() {
                Ok(mut lines) => lines.push(line),
                Err(poisoned) => poisoned.into_inner().push(line),
            },
        }
    }
}

/// Whether trials are traced, and where to
#[derive(Debug, Clone, Default)]
pub struct TraceConfig {
    pub enabled: bool,
    pub sink: TraceSink,
}

impl TraceConfig {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(sink: TraceSink) -> Self {
        Self {
            enabled: true,
            sink,
        }
    }

    /// Read [`TRACE_ENV_VAR`]; trace goes to stderr when it holds a truthy value.
    pub fn from_env() -> Self {
        Self::from_toggle(env::var(TRACE_ENV_VAR).ok().as_deref())
    }

    /// Resolve a raw toggle value the same way [`from_env`](Self::from_env) does
    pub fn from_toggle(value: Option<&str>) -> Self {
        match value {
            Some(value) if is_truthy(value) => Self::enabled(TraceSink::Stderr),
            _ => Self::disabled(),
        }
    }

    /// Emit the line for one trial, if enabled
    pub fn record(&self, trial: usize, iterations: usize, serialized: &str) {
        if self.enabled {
            self.sink.write(format_trace_line(trial, iterations, serialized));
        }
    }
}

/// `1`, `true`, `yes` and `on`, ignoring case and surrounding whitespace
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// The process-wide trace setting, read from the environment on first use
pub fn global_trace_config() -> &'static TraceConfig {
    static GLOBAL: OnceLock<TraceConfig> = OnceLock::new();
    GLOBAL.get_or_init(TraceConfig::from_env)
}

/// Cut `serialized` to [`TRACE_VALUE_LIMIT`] characters, marking the cut with `…`
pub fn truncate_for_trace(serialized: &str) -> String {
    match serialized.char_indices().nth(TRACE_VALUE_LIMIT) {
        Some((cut, _)) => {
            let mut truncated = serialized[..cut].to_string();
            truncated.push(ELLIPSIS);
            truncated
        }
        None => serialized.to_string(),
    }
}

pub fn format_trace_line(trial: usize, iterations: usize, serialized: &str) -> String {
    format!(
        "quickprop: trial {}/{}: {}",
        trial,
        iterations,
        truncate_for_trace(serialized)
    )
}
