/*! Logging configuration for the hello binary

Exports:
- `LogLevel`: log-level type accepted by `HELLO_LOG`
- `get_log_level()`: resolves the log level (from env or default)
- `init_tracing()`: initializes the global tracing subscriber

Diagnostics always go to stderr so that stdout carries nothing but the
greeting.

*/

use std::io::IsTerminal;

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "HELLO_LOG";

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!(
                "Invalid log level: {s}. Must be one of: trace, debug, info, warn, error"
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get the log level from `HELLO_LOG`, defaulting to `warn`.
pub fn get_log_level() -> LogLevel {
    parse_log_level(std::env::var(LOG_ENV_VAR).ok().as_deref())
}

fn parse_log_level(raw: Option<&str>) -> LogLevel {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// Initialize tracing with the specified log level
///
/// Only events from this crate are enabled. Attempts to install a global
/// subscriber writing to stderr (no-op if one is already set).
pub fn init_tracing(log_level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::new(format!(
        "{crate_name}={log_level}",
        crate_name = env!("CARGO_CRATE_NAME")
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .try_init();
}
