//! Run Command
//!
//! Console front end for one transcript: resolves configuration, runs the
//! pipeline, prints the task summary and maps the outcome to an exit code.
//! stdout carries the summary; problems go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;

use crate::models::run::{RenderOutcome, RunOutcome, RunReport};
use crate::models::settings::ConfigOverrides;
use crate::services::pipeline::Pipeline;
use crate::storage::config::ConfigService;
use crate::utils::error::AppError;

/// Arguments for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub input: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Process one transcript end to end.
pub async fn run(args: RunArgs) -> ExitCode {
    if !args.input.is_file() {
        eprintln!("Error: input file not found: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    let config = match ConfigService::resolve(args.config_path.as_deref(), args.overrides) {
        Ok(service) => service.into_config(),
        Err(e) => {
            eprintln!("{}", format_error("Could not load configuration.", &e));
            return ExitCode::FAILURE;
        }
    };

    let pipeline = match Pipeline::from_config(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("{}", format_error("Could not set up the model provider.", &e));
            return ExitCode::FAILURE;
        }
    };

    let report = match pipeline.run(&args.input).await {
        Ok(RunOutcome::Completed(report)) => report,
        Ok(RunOutcome::NoTasks) => {
            println!("No tasks were extracted. Review the prompt or the transcript.");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "run failed");
            eprintln!("{}", format_error("Task extraction failed.", &e));
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_summary(&report));

    if pipeline.config().renderer.enabled {
        println!("\n=== Rendering diagram ===");
    }
    let outcome = pipeline.render(&report.files).await;
    if let Some(line) = format_render_outcome(&outcome) {
        println!("{}", line);
    }

    ExitCode::SUCCESS
}

/// Operator-facing description of a failed run.
pub fn format_error(headline: &str, err: &AppError) -> String {
    format!("{}\n  kind:   {}\n  detail: {}", headline, err.kind(), err)
}

/// Task list followed by the written files.
pub fn format_summary(report: &RunReport) -> String {
    let mut lines = vec!["=== Extracted tasks ===".to_string()];
    for task in &report.task_set {
        let deps = if task.depends_on.is_empty() {
            "none".to_string()
        } else {
            task.depends_on.join(", ")
        };
        lines.push(format!("- {}: {}  [deps: {}]", task.id, task.title, deps));
    }

    lines.push(String::new());
    lines.push("=== Output files ===".to_string());
    lines.push(format!("Output folder: {}", report.files.dir.display()));
    for file in report.files.files() {
        if let Some(name) = file.file_name() {
            lines.push(format!("  - {}", name.to_string_lossy()));
        }
    }
    lines.join("\n")
}

/// One-line report of the renderer result; nothing when it was disabled.
pub fn format_render_outcome(outcome: &RenderOutcome) -> Option<String> {
    match outcome {
        RenderOutcome::Rendered => Some("Diagram rendered.".to_string()),
        RenderOutcome::Disabled => None,
        RenderOutcome::Skipped { reason } => {
            Some(format!("[note] Diagram rendering skipped: {}", reason))
        }
        RenderOutcome::Failed { exit_code: Some(code) } => {
            Some(format!("[renderer] Exited with code {}.", code))
        }
        RenderOutcome::Failed { exit_code: None } => {
            Some("[renderer] Terminated by a signal.".to_string())
        }
        RenderOutcome::Error { message } => Some(format!("[renderer] {}", message)),
    }
}
