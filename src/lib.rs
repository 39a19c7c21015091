//! Meeting Tasks
//!
//! Turns a meeting transcript into the designated user's action items and a
//! Mermaid dependency graph. It includes:
//! - Configuration (defaults, config file, command-line overrides)
//! - The extraction service (one model round trip per transcript)
//! - Numbered output folders and the files written into them
//! - The external diagram renderer
//! - The `run` command used by the binary

pub mod commands;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use commands::{run, RunArgs};
pub use models::run::{OutputFiles, RenderOutcome, RunOutcome, RunReport};
pub use models::settings::{AppConfig, ConfigOverrides, RendererConfig};
pub use services::{DiagramRenderer, Pipeline, TaskExtractor};
pub use utils::error::{AppError, AppResult};
