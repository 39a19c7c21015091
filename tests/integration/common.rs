//! Shared test helpers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meeting_tasks::{AppConfig, Pipeline, RendererConfig};
use meeting_tasks_llm::{LlmError, LlmProvider, LlmResponse, LlmResult, Message};

/// Mock provider replaying canned responses in order.
pub struct MockLlmProvider {
    responses: Mutex<Vec<LlmResult<LlmResponse>>>,
    pub requests: Mutex<Vec<(Vec<Message>, Option<String>)>>,
}

impl MockLlmProvider {
    pub fn new(responses: Vec<LlmResult<LlmResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text_response(text: &str) -> Self {
        Self::new(vec![Ok(LlmResponse::text(text, "mock-model"))])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<LlmResponse> {
        self.requests.lock().unwrap().push((messages, system));
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(LlmError::Other {
                message: "No more mock responses available".to_string(),
            })
        } else {
            responses.remove(0)
        }
    }
}

/// Config writing under `root/output` with the renderer turned off.
pub fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        output_root: root.join("output"),
        renderer: RendererConfig {
            enabled: false,
            ..RendererConfig::default()
        },
        ..AppConfig::default()
    }
}

pub fn pipeline_with(root: &Path, provider: Arc<MockLlmProvider>) -> Pipeline {
    Pipeline::new(test_config(root), provider)
}

/// Write a transcript file named `name` under `root`.
pub fn write_transcript(root: &Path, name: &str, text: &str) -> PathBuf {
    let path = root.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

pub const TRANSCRIPT: &str = "\
Manager: Nagai, please collect last quarter's sales data first.
Nagai: Sure.
Manager: Once the data is in, Nagai-kun is in charge of the report draft, due 2025-03-14.
Suzuki: I'll book the meeting room.
Manager: When the draft is done, Nagai, send it to the client.";

pub const RESPONSE: &str = r#"```json
{
  "tasks": [
    {"id": "T1", "title": "Collect sales data", "detail": "last quarter", "owner": "me", "deadline": null, "depends_on": []},
    {"id": "T2", "title": "Draft the \"Q1\" report", "owner": "me", "deadline": "2025-03-14", "depends_on": ["T1"]},
    {"id": "T3", "title": "Send draft to client", "owner": "me", "deadline": "unknown", "depends_on": ["T2"]}
  ]
}
```"#;
