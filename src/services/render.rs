//! Diagram Renderer
//!
//! Runs the external diagram toolchain on a written `.ddm` file. The tool runs
//! as a child process inside its own directory; this process never changes its
//! working directory. Failures are reported, never propagated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{info, warn};

use crate::models::run::RenderOutcome;
use crate::models::settings::RendererConfig;
use crate::utils::paths::relative_to;

/// Invokes `<program> <args...> <diagram path>` in the renderer directory.
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    config: RendererConfig,
}

impl DiagramRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Renderer directory, resolved against the current directory.
    pub fn working_dir(&self) -> PathBuf {
        if self.config.working_dir.is_absolute() {
            return self.config.working_dir.clone();
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(&self.config.working_dir))
            .unwrap_or_else(|_| self.config.working_dir.clone())
    }

    /// Command line that would be run for `diagram`, for display.
    pub fn command_line(&self, diagram: &Path) -> String {
        let mut parts = vec![self.config.program.clone()];
        parts.extend(self.config.args.iter().cloned());
        parts.push(diagram.display().to_string());
        parts.join(" ")
    }

    /// Render `ddm_path`.
    pub async fn render(&self, ddm_path: &Path) -> RenderOutcome {
        if !self.config.enabled {
            return RenderOutcome::Disabled;
        }

        let working_dir = self.working_dir();
        if !working_dir.is_dir() {
            warn!(
                dir = %working_dir.display(),
                "renderer directory not found, skipping diagram rendering"
            );
            return RenderOutcome::skipped(format!(
                "renderer directory '{}' not found",
                working_dir.display()
            ));
        }

        let diagram = diagram_argument(ddm_path, &working_dir);
        info!(
            dir = %working_dir.display(),
            command = %self.command_line(&diagram),
            "rendering diagram"
        );

        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(&diagram)
            .current_dir(&working_dir)
            .status()
            .await;

        match status {
            Ok(status) if status.success() => RenderOutcome::Rendered,
            Ok(status) => {
                warn!(exit_code = ?status.code(), "diagram renderer failed");
                RenderOutcome::Failed {
                    exit_code: status.code(),
                }
            }
            Err(e) => {
                let message = if e.kind() == ErrorKind::NotFound {
                    format!("'{}' was not found in PATH", self.config.program)
                } else {
                    format!("Failed to start '{}': {}", self.config.program, e)
                };
                warn!(error = %message, "diagram renderer could not be started");
                RenderOutcome::Error { message }
            }
        }
    }
}

/// Path of the diagram as seen from the renderer directory; the absolute
/// path when no relative form exists.
fn diagram_argument(ddm_path: &Path, working_dir: &Path) -> PathBuf {
    let (Ok(diagram), Ok(dir)) = (ddm_path.canonicalize(), working_dir.canonicalize()) else {
        return ddm_path.to_path_buf();
    };
    relative_to(&diagram, &dir).unwrap_or(diagram)
}
