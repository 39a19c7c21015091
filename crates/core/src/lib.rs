//! Meeting Tasks Core
//!
//! The prompt-to-structured-data pipeline for extracting a person's action
//! items from a meeting transcript. Pure and synchronous: no I/O, no network,
//! no global state.
//!
//! ## Module Organization
//!
//! - `error` - Classified extraction failures (`ExtractionError`, `ExtractionResult`)
//! - `task` - Task model (`Task`, `TaskSet`, `Deadline`, `TaskOwner`)
//! - `request` - Extraction request builder (system instructions + transcript content)
//! - `extract` - Tolerant JSON extraction from free-form model output
//! - `schema` - Validation and normalization of decoded JSON into a `TaskSet`
//! - `graph` - Dependency graph derivation and Mermaid rendering
//!
//! ## Flow
//!
//! transcript + aliases → `build_extraction_request` → (model) → raw text →
//! `extract_json` → `validate_task_set` → `render_mermaid`

pub mod error;
pub mod extract;
pub mod graph;
pub mod request;
pub mod schema;
pub mod task;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{ExtractionError, ExtractionResult};

// ── Task Model ─────────────────────────────────────────────────────────
pub use task::{Deadline, Task, TaskOwner, TaskSet};

// ── Pipeline Stages ────────────────────────────────────────────────────
pub use extract::extract_json;
pub use graph::{render_mermaid, DependencyGraph, GraphEdge, GraphNode};
pub use request::{build_extraction_request, ExtractionRequest};
pub use schema::validate_task_set;

/// Decode and validate a raw model response in one step.
pub fn parse_task_response(raw: &str) -> ExtractionResult<TaskSet> {
    let value = extract_json(raw)?;
    validate_task_set(&value)
}
