//! Data Models
//!
//! Configuration and run-result structures shared by services and commands.

pub mod run;
pub mod settings;

pub use run::*;
pub use settings::*;
