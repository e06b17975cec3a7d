//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Results go to stdout, diagnostics to stderr. Log events are handled by
//! `tracing`, not by this module.

pub mod output;
