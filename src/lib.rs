//! Hello - prints a fixed greeting to standard output
//!
//! The library exposes the greeter itself (writing to any `io::Write` sink)
//! together with the CLI entrypoint and logging setup used by the binary.

pub mod cli;
pub mod config;
pub mod greeter;

// Re-export commonly used items for convenience
pub use config::LogLevel;
pub use greeter::{greet, GREETING};
