//! Run Pipeline
//!
//! transcript file → extraction → graph → numbered output folder → renderer.

use std::path::Path;
use std::sync::Arc;

use meeting_tasks_core::{render_mermaid, ExtractionError};
use meeting_tasks_llm::{LlmProvider, OpenAIProvider};
use tracing::info;

use crate::models::run::{OutputFiles, RenderOutcome, RunOutcome, RunReport};
use crate::models::settings::AppConfig;
use crate::services::extraction::TaskExtractor;
use crate::services::render::DiagramRenderer;
use crate::storage::output::{create_output_dir, write_outputs};
use crate::utils::error::{AppError, AppResult};

/// Processes one transcript per [`run`](Self::run) call.
pub struct Pipeline {
    config: AppConfig,
    extractor: TaskExtractor,
    renderer: DiagramRenderer,
}

impl Pipeline {
    /// Build a pipeline around an existing provider.
    pub fn new(config: AppConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let extractor = TaskExtractor::new(provider, config.user_aliases.clone());
        let renderer = DiagramRenderer::new(config.renderer.clone());
        Self {
            config,
            extractor,
            renderer,
        }
    }

    /// Build a pipeline talking to the configured OpenAI-compatible endpoint.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let provider = OpenAIProvider::new(config.provider_config())?;
        Ok(Self::new(config, Arc::new(provider)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract tasks from `input_path` and write the run's files.
    ///
    /// An empty extraction writes nothing and returns [`RunOutcome::NoTasks`].
    pub async fn run(&self, input_path: &Path) -> AppResult<RunOutcome> {
        if !input_path.is_file() {
            return Err(AppError::not_found(format!(
                "input file '{}'",
                input_path.display()
            )));
        }
        let transcript = tokio::fs::read_to_string(input_path).await?;

        let task_set = match self.extractor.extract(&transcript).await?.ensure_not_empty() {
            Ok(set) => set,
            Err(ExtractionError::EmptyTaskSet) => {
                info!(input = %input_path.display(), "no tasks extracted, nothing written");
                return Ok(RunOutcome::NoTasks);
            }
            Err(e) => return Err(e.into()),
        };

        let graph = render_mermaid(&task_set);
        let dir = create_output_dir(&self.config.output_root, input_path)?;
        let files = write_outputs(&dir, &task_set, &graph)?;

        Ok(RunOutcome::Completed(RunReport {
            task_set,
            graph,
            files,
        }))
    }

    /// Hand the written diagram to the external renderer.
    pub async fn render(&self, files: &OutputFiles) -> RenderOutcome {
        self.renderer.render(&files.ddm).await
    }
}
