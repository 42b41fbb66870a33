//! listfmt CLI library
//!
//! This library provides the command-line interface for the listfmt
//! list formatter.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, CliResult};
