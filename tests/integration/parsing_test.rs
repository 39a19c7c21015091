//! Parsing Integration Tests
//!
//! Raw model text → decoded JSON → TaskSet → Mermaid, through the public
//! core API only.

use chrono::NaiveDate;
use meeting_tasks_core::{
    extract_json, parse_task_response, render_mermaid, validate_task_set, Deadline,
    ExtractionError, TaskOwner,
};

use super::common::RESPONSE;

#[test]
fn test_trimming_does_not_change_decoded_value() {
    let json = r#"{"tasks": [{"id": "T1", "title": "A"}]}"#;
    let padded = format!("\n\t  {}  \n", json);
    assert_eq!(extract_json(&padded).unwrap(), extract_json(json).unwrap());
}

#[test]
fn test_fenced_json_decodes_like_inner_json() {
    let inner = r#"{"tasks": [{"id": "T1", "title": "A", "depends_on": []}]}"#;
    let fenced = format!("```json\n{}\n```", inner);
    assert_eq!(extract_json(&fenced).unwrap(), extract_json(inner).unwrap());
}

#[test]
fn test_prose_only_reports_first_200_chars() {
    let prose = "No tasks were assigned. ".repeat(20);
    let err = extract_json(&prose).unwrap_err();
    let expected: String = prose.trim().chars().take(200).collect();
    assert_eq!(
        err,
        ExtractionError::NoJsonFound {
            snippet: expected
        }
    );
}

#[test]
fn test_parser_is_deterministic() {
    let first = extract_json(RESPONSE).unwrap();
    let second = extract_json(RESPONSE).unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_minimal_task_gets_defaults() {
    let value = extract_json(r#"{"tasks": [{"id":"T1","title":"Write report","depends_on":[]}]}"#)
        .unwrap();
    let set = validate_task_set(&value).unwrap();
    assert_eq!(set.len(), 1);
    let task = &set.tasks()[0];
    assert_eq!(task.detail, "");
    assert_eq!(task.owner, TaskOwner::Me);
    assert_eq!(task.deadline, Deadline::Unknown);
    assert!(task.depends_on.is_empty());
}

#[test]
fn test_full_response_to_mermaid() {
    let set = parse_task_response(RESPONSE).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(
        set.tasks()[1].deadline,
        Deadline::Date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    );
    assert!(set.tasks()[2].deadline.is_unknown());

    let graph = render_mermaid(&set);
    let lines: Vec<&str> = graph.lines().collect();
    assert_eq!(
        lines,
        vec![
            "graph LR",
            "  T1[\"Collect sales data\"]",
            "  T2[\"Draft the #quot;Q1#quot; report\"]",
            "  T3[\"Send draft to client\"]",
            "  T1 --> T2",
            "  T2 --> T3",
        ]
    );
    assert!(!graph.ends_with('\n'));
}

#[test]
fn test_two_tasks_single_edge_after_nodes() {
    let set = parse_task_response(
        r#"{"tasks": [{"id": "T1", "title": "A"}, {"id": "T2", "title": "B", "depends_on": ["T1"]}]}"#,
    )
    .unwrap();
    let graph = render_mermaid(&set);
    let lines: Vec<&str> = graph.lines().collect();
    let edge_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.contains("-->"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(edge_lines.len(), 1);
    assert_eq!(lines[edge_lines[0]].trim(), "T1 --> T2");
    let last_node = lines.iter().rposition(|l| l.contains("[\"")).unwrap();
    assert!(last_node < edge_lines[0]);
}

#[test]
fn test_dangling_dependency_is_accepted_and_rendered() {
    let set = parse_task_response(r#"{"tasks": [{"id": "T2", "title": "B", "depends_on": ["T9"]}]}"#)
        .unwrap();
    assert_eq!(set.dangling_dependencies(), vec![("T2", "T9")]);
    assert!(render_mermaid(&set).ends_with("  T9 --> T2"));
}

#[test]
fn test_blank_ids_never_reach_the_graph() {
    let err = parse_task_response(
        r#"{"tasks": [{"id": "", "title": "a"}, {"id": "Task 2", "title": "b", "depends_on": [""]}]}"#,
    )
    .unwrap_err();
    assert_eq!(err, ExtractionError::schema("task #1 has an empty `id`"));

    let err = parse_task_response(r#"{"tasks": [{"id": "Task 2", "title": "b", "depends_on": [""]}]}"#)
        .unwrap_err();
    assert_eq!(err.kind(), "SchemaError");
}

#[test]
fn test_empty_task_list_is_advisory_not_crash() {
    let set = parse_task_response(r#"{"tasks": []}"#).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.ensure_not_empty().unwrap_err(), ExtractionError::EmptyTaskSet);
}

#[test]
fn test_broken_json_inside_braces_is_unparsable() {
    let err = parse_task_response("Result: {\"tasks\": [ {\"id\": \"T1\",, }").unwrap_err();
    assert_eq!(err.kind(), "UnparsableJson");
    assert!(err.snippet().unwrap().starts_with("{\"tasks\""));
}
