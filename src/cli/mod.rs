//! Hello CLI module
//!
//! Holds the argument parser and the `run` entrypoint invoked by the binary.
//! The command consults no arguments: everything on the command line,
//! including `--help` and `--version`, is accepted and ignored.

use std::ffi::OsString;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::greeter;

#[derive(Parser, Debug, Default)]
#[command(name = "hello")]
#[command(about = "Print a friendly greeting to standard output.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _args: Vec<OsString>,
}

impl Cli {
    /// Write the greeting to standard output.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        greeter::greet(&mut handle).context("failed to write greeting to standard output")
    }
}
