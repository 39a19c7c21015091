//! Utilities
//!
//! Application error type and filesystem path helpers.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
