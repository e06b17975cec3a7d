//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Stdout carries only the result, so build scripts can capture it
//! directly. When `--json` is enabled, the result is a single JSON object.

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;

/// Print a result line to stdout.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print an error message to stderr (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Render a value as pretty-printed JSON.
pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
