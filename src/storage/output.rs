//! Run Output Files
//!
//! Numbered per-run folders under the output root (`output/001_meeting`) and
//! the files written into them.

use std::fs;
use std::path::{Path, PathBuf};

use meeting_tasks_core::TaskSet;
use tracing::{debug, info};

use crate::models::run::OutputFiles;
use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_dir, file_stem};

/// Width of the zero-padded run number.
const RUN_NUMBER_WIDTH: usize = 3;

/// Create the next numbered folder for `input_path` under `root`.
///
/// Sibling folders named `<digits>_<stem>` (with `<stem>` equal to the input
/// file stem) are scanned and the highest number plus one is used. Creation
/// fails if the folder already exists.
pub fn create_output_dir(root: &Path, input_path: &Path) -> AppResult<PathBuf> {
    ensure_dir(root)?;

    let stem = file_stem(input_path)?;
    let next = highest_run_number(root, &stem)?.map_or(1, |n| n + 1);
    let run_dir = root.join(format!("{:0width$}_{}", next, stem, width = RUN_NUMBER_WIDTH));

    fs::create_dir(&run_dir)?;
    info!(dir = %run_dir.display(), "created output folder");
    Ok(run_dir)
}

/// Highest run number among `<digits>_<stem>` folders directly under `root`.
fn highest_run_number(root: &Path, stem: &str) -> AppResult<Option<u64>> {
    let mut highest = None;

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(number) = run_number(&name.to_string_lossy(), stem) else {
            continue;
        };
        highest = highest.max(Some(number));
    }

    Ok(highest)
}

/// Parse `<digits>_<stem>`, splitting on the first underscore.
fn run_number(dir_name: &str, stem: &str) -> Option<u64> {
    let (digits, name) = dir_name.split_once('_')?;
    if name != stem || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Write the structured record and both graph files into `dir`.
pub fn write_outputs(dir: &Path, task_set: &TaskSet, graph_text: &str) -> AppResult<OutputFiles> {
    let files = OutputFiles::in_dir(dir);

    let record = serde_json::to_string_pretty(task_set)?;
    fs::write(&files.tasks_json, record)?;
    fs::write(&files.mermaid, graph_text)?;
    fs::write(&files.ddm, graph_text)?;

    debug!(
        tasks = task_set.len(),
        dir = %dir.display(),
        "wrote tasks.json, diagram.mmd and diagram.ddm"
    );
    Ok(files)
}
