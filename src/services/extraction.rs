//! Task Extraction Service
//!
//! One model round trip per transcript: build the request, send it, and turn
//! the raw text back into a validated `TaskSet`. No retry, no repair prompt;
//! any failure ends the run.

use std::sync::Arc;

use meeting_tasks_core::{build_extraction_request, parse_task_response, ExtractionError, TaskSet};
use meeting_tasks_llm::{LlmProvider, LlmResponse, Message, StopReason};
use tracing::{debug, info, warn};

use crate::utils::error::AppResult;

/// Characters of the raw response shown in debug logs.
const PREVIEW_CHARS: usize = 300;

/// Extracts the designated user's tasks from a transcript.
pub struct TaskExtractor {
    provider: Arc<dyn LlmProvider>,
    aliases: Vec<String>,
}

impl TaskExtractor {
    pub fn new(provider: Arc<dyn LlmProvider>, aliases: Vec<String>) -> Self {
        Self { provider, aliases }
    }

    /// Extract tasks from `transcript`.
    ///
    /// The returned set may be empty; whether that is an error is up to the
    /// caller.
    pub async fn extract(&self, transcript: &str) -> AppResult<TaskSet> {
        let request = build_extraction_request(transcript, &self.aliases);

        info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            transcript_chars = transcript.chars().count(),
            "extracting tasks"
        );

        let response = self
            .provider
            .send_message(vec![Message::user(request.user)], Some(request.system))
            .await?;

        info!(
            total_tokens = response.usage.total_tokens(),
            stop_reason = ?response.stop_reason,
            "model response received"
        );
        if response.stop_reason == StopReason::MaxTokens {
            warn!("model response hit the token limit and may be truncated");
        }

        let raw = response_text(&response)?;
        debug!(
            len = raw.len(),
            preview = %raw.chars().take(PREVIEW_CHARS).collect::<String>(),
            "raw model response"
        );

        let task_set = parse_task_response(raw)?;
        for (task, dependency) in task_set.dangling_dependencies() {
            warn!(task, dependency, "dependency does not name an extracted task");
        }
        info!(tasks = task_set.len(), "tasks extracted");
        Ok(task_set)
    }
}

/// Text to parse from a response: content, else reasoning text.
fn response_text(response: &LlmResponse) -> Result<&str, ExtractionError> {
    let text = response.text_output().ok_or(ExtractionError::EmptyResponse)?;
    if response.content.as_deref().map_or(true, |c| c.trim().is_empty()) {
        debug!(
            thinking_len = text.len(),
            "content field empty, falling back to reasoning text"
        );
    }
    Ok(text)
}
