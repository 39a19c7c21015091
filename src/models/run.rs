//! Run Models
//!
//! What a single transcript-processing run produced.

use std::path::PathBuf;

use meeting_tasks_core::TaskSet;
use serde::Serialize;

/// Structured record file name
pub const TASKS_FILE: &str = "tasks.json";
/// Mermaid graph file name
pub const MERMAID_FILE: &str = "diagram.mmd";
/// Graph file handed to the diagram renderer
pub const DDM_FILE: &str = "diagram.ddm";

/// Paths of the files written for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFiles {
    pub dir: PathBuf,
    pub tasks_json: PathBuf,
    pub mermaid: PathBuf,
    pub ddm: PathBuf,
}

impl OutputFiles {
    /// Standard file layout inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            tasks_json: dir.join(TASKS_FILE),
            mermaid: dir.join(MERMAID_FILE),
            ddm: dir.join(DDM_FILE),
            dir,
        }
    }

    /// The written files, in the order they are reported.
    pub fn files(&self) -> [&PathBuf; 3] {
        [&self.tasks_json, &self.mermaid, &self.ddm]
    }
}

/// Result of invoking the external diagram renderer. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// Renderer exited successfully
    Rendered,
    /// Rendering is turned off in the configuration
    Disabled,
    /// Renderer was not run
    Skipped { reason: String },
    /// Renderer ran and exited non-zero
    Failed { exit_code: Option<i32> },
    /// Renderer could not be started
    Error { message: String },
}

impl RenderOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

/// Outcome of one run of the pipeline.
#[derive(Debug)]
pub enum RunOutcome {
    /// The model found no tasks for the user; nothing was written
    NoTasks,
    /// Tasks were extracted and written
    Completed(RunReport),
}

/// Everything a completed run wrote.
#[derive(Debug)]
pub struct RunReport {
    pub task_set: TaskSet,
    pub graph: String,
    pub files: OutputFiles,
}
