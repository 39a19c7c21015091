//! Storage Layer
//!
//! JSON config persistence and the per-run output files.

pub mod config;
pub mod output;

pub use config::*;
pub use output::*;
