//! Commands
//!
//! Entry points invoked by the binary.

pub mod run;

pub use run::{run, RunArgs};
