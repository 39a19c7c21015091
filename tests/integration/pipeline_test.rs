//! Pipeline Integration Tests
//!
//! Full runs against a mock provider: request content, numbered output
//! folders, written files, and the runs that must write nothing.

use std::fs;
use std::sync::Arc;

use meeting_tasks::{AppError, RenderOutcome, RunOutcome};
use meeting_tasks_core::ExtractionError;
use meeting_tasks_llm::{LlmError, LlmResponse};

use super::common::{pipeline_with, write_transcript, MockLlmProvider, RESPONSE, TRANSCRIPT};

#[tokio::test]
async fn test_run_writes_record_and_graphs() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::with_text_response(RESPONSE));
    let pipeline = pipeline_with(temp.path(), provider.clone());

    let RunOutcome::Completed(report) = pipeline.run(&input).await.unwrap() else {
        panic!("Expected Completed");
    };

    assert_eq!(provider.call_count(), 1);
    assert_eq!(report.task_set.len(), 3);
    assert_eq!(report.files.dir, temp.path().join("output").join("001_meeting"));

    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.files.tasks_json).unwrap()).unwrap();
    assert_eq!(record["tasks"].as_array().unwrap().len(), 3);
    assert_eq!(record["tasks"][1]["deadline"], "2025-03-14");
    assert!(record["tasks"][2]["deadline"].is_null());

    let mermaid = fs::read_to_string(&report.files.mermaid).unwrap();
    assert_eq!(mermaid, report.graph);
    assert_eq!(fs::read_to_string(&report.files.ddm).unwrap(), mermaid);

    assert_eq!(pipeline.render(&report.files).await, RenderOutcome::Disabled);
}

#[tokio::test]
async fn test_request_embeds_aliases_and_transcript() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::with_text_response(RESPONSE));
    pipeline_with(temp.path(), provider.clone())
        .run(&input)
        .await
        .unwrap();

    let requests = provider.requests.lock().unwrap();
    let (messages, system) = &requests[0];
    assert!(messages[0].content.contains("Nagai, Nagai-kun"));
    assert!(messages[0].content.contains(TRANSCRIPT));
    let system = system.as_deref().unwrap();
    assert!(system.contains("Never guess a date"));
    assert!(system.contains("no markdown fences"));
}

#[tokio::test]
async fn test_repeat_runs_increment_folder_number() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "weekly.md", TRANSCRIPT);
    fs::create_dir_all(temp.path().join("output").join("004_weekly")).unwrap();
    fs::create_dir_all(temp.path().join("output").join("010_other")).unwrap();

    let provider = Arc::new(MockLlmProvider::new(vec![
        Ok(LlmResponse::text(RESPONSE, "mock-model")),
        Ok(LlmResponse::text(RESPONSE, "mock-model")),
    ]));
    let pipeline = pipeline_with(temp.path(), provider);

    for expected in ["005_weekly", "006_weekly"] {
        let RunOutcome::Completed(report) = pipeline.run(&input).await.unwrap() else {
            panic!("Expected Completed");
        };
        assert!(report.files.dir.ends_with(expected));
    }
}

#[tokio::test]
async fn test_no_tasks_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::with_text_response(r#"{"tasks": []}"#));

    let outcome = pipeline_with(temp.path(), provider).run(&input).await.unwrap();
    assert!(matches!(outcome, RunOutcome::NoTasks));
    assert!(!temp.path().join("output").exists());
}

#[tokio::test]
async fn test_missing_tasks_key_counts_as_no_tasks() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::with_text_response(r#"{"items": []}"#));

    let outcome = pipeline_with(temp.path(), provider).run(&input).await.unwrap();
    assert!(matches!(outcome, RunOutcome::NoTasks));
}

#[tokio::test]
async fn test_classified_failures_write_nothing() {
    let cases = vec![
        ("", "EmptyResponse"),
        ("I could not find any tasks.", "NoJsonFound"),
        ("{\"tasks\": [ oops }", "UnparsableJson"),
        (r#"{"tasks": {"id": "T1"}}"#, "SchemaError"),
        (
            r#"{"tasks": [{"id": "T1", "title": "A"}, {"id": "T1", "title": "B"}]}"#,
            "SchemaError",
        ),
    ];

    for (response, kind) in cases {
        let temp = tempfile::tempdir().unwrap();
        let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
        let provider = Arc::new(MockLlmProvider::with_text_response(response));

        let err = pipeline_with(temp.path(), provider)
            .run(&input)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)), "{:?}", err);
        assert_eq!(err.kind(), kind, "response: {:?}", response);
        assert!(!temp.path().join("output").exists());
    }
}

#[tokio::test]
async fn test_provider_failure_is_terminal() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::new(vec![Err(LlmError::AuthenticationFailed {
        message: "API key not configured for openai".to_string(),
    })]));

    let err = pipeline_with(temp.path(), provider.clone())
        .run(&input)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "AuthenticationFailed");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_missing_input_never_calls_provider() {
    let temp = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockLlmProvider::with_text_response(RESPONSE));

    let err = pipeline_with(temp.path(), provider.clone())
        .run(&temp.path().join("nope.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_empty_response_error_value() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_transcript(temp.path(), "meeting.txt", TRANSCRIPT);
    let provider = Arc::new(MockLlmProvider::with_text_response("  "));

    let err = pipeline_with(temp.path(), provider).run(&input).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Extraction(ExtractionError::EmptyResponse)
    ));
}
