//! Schema Validation
//!
//! Turns the decoded JSON value into a [`TaskSet`], defaulting optional fields
//! and reporting the first structural violation as
//! [`ExtractionError::SchemaError`].
//!
//! Policy:
//! - a missing `tasks` key is an empty list; a non-array `tasks` is an error
//! - `id` and `title` are required; scalar values are coerced to text
//! - `id` and `depends_on` entries must not be blank, so every graph node and
//!   edge has an identifier
//! - `detail` defaults to `""`, `deadline` to unknown, `depends_on` to `[]`
//! - `owner` is always the fixed user marker
//! - `depends_on` is not checked against the known ids

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ExtractionError, ExtractionResult};
use crate::task::{Deadline, Task, TaskOwner, TaskSet};

/// Deadline strings treated as the unknown marker.
const UNKNOWN_DEADLINES: &[&str] = &["", "unknown", "null", "none", "n/a", "tbd"];

/// Validate and normalize a decoded response into a task set.
pub fn validate_task_set(value: &Value) -> ExtractionResult<TaskSet> {
    let root = value.as_object().ok_or_else(|| {
        ExtractionError::schema(format!(
            "top level must be an object, got {}",
            type_name(value)
        ))
    })?;

    let items = match root.get("tasks") {
        None | Some(Value::Null) => {
            debug!("schema: response has no `tasks` key, treating as empty");
            return TaskSet::new(Vec::new());
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ExtractionError::schema(format!(
                "`tasks` must be an array, got {}",
                type_name(other)
            )))
        }
    };

    let tasks = items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_task(index, item))
        .collect::<ExtractionResult<Vec<_>>>()?;

    TaskSet::new(tasks)
}

/// Normalize one element of the `tasks` array.
fn normalize_task(index: usize, item: &Value) -> ExtractionResult<Task> {
    let obj = item.as_object().ok_or_else(|| {
        ExtractionError::schema(format!(
            "task #{} must be an object, got {}",
            index + 1,
            type_name(item)
        ))
    })?;

    let id = required_text(obj, "id", index)?;
    if id.trim().is_empty() {
        return Err(ExtractionError::schema(format!(
            "task #{} has an empty `id`",
            index + 1
        )));
    }
    let title = required_text(obj, "title", index)?;

    let detail = match obj.get("detail") {
        None | Some(Value::Null) => String::new(),
        Some(v) => coerce_text(v).ok_or_else(|| {
            ExtractionError::schema(format!("task '{}': `detail` must be text", id))
        })?,
    };

    if let Some(owner) = obj.get("owner").and_then(Value::as_str) {
        if owner != TaskOwner::Me.to_string() {
            debug!(task = %id, owner, "schema: overriding owner with the fixed user marker");
        }
    }

    let deadline = normalize_deadline(&id, obj.get("deadline"));
    let depends_on = normalize_dependencies(&id, obj.get("depends_on"))?;

    Ok(Task {
        id,
        title,
        detail,
        owner: TaskOwner::Me,
        deadline,
        depends_on,
    })
}

fn required_text(obj: &Map<String, Value>, key: &str, index: usize) -> ExtractionResult<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ExtractionError::schema(format!(
            "task #{} is missing `{}`",
            index + 1,
            key
        ))),
        Some(v) => coerce_text(v).ok_or_else(|| {
            ExtractionError::schema(format!(
                "task #{}: `{}` must be text, got {}",
                index + 1,
                key,
                type_name(v)
            ))
        }),
    }
}

/// Text for strings, JSON text for numbers and booleans, `None` otherwise.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize_deadline(id: &str, value: Option<&Value>) -> Deadline {
    let Some(Value::String(text)) = value else {
        if let Some(v) = value.filter(|v| !v.is_null()) {
            warn!(task = %id, deadline = %v, "schema: non-text deadline, treating as unknown");
        }
        return Deadline::Unknown;
    };

    let trimmed = text.trim();
    if UNKNOWN_DEADLINES.contains(&trimmed.to_lowercase().as_str()) {
        return Deadline::Unknown;
    }

    Deadline::parse_iso(trimmed).unwrap_or_else(|| {
        warn!(task = %id, deadline = %trimmed, "schema: deadline is not an ISO date, treating as unknown");
        Deadline::Unknown
    })
}

fn normalize_dependencies(id: &str, value: Option<&Value>) -> ExtractionResult<Vec<String>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(deps)) => deps
            .iter()
            .map(|dep| {
                let dep_id = coerce_text(dep).ok_or_else(|| {
                    ExtractionError::schema(format!(
                        "task '{}': `depends_on` entries must be ids, got {}",
                        id,
                        type_name(dep)
                    ))
                })?;
                if dep_id.trim().is_empty() {
                    return Err(ExtractionError::schema(format!(
                        "task '{}' has an empty `depends_on` entry",
                        id
                    )));
                }
                Ok(dep_id)
            })
            .collect(),
        Some(other) => Err(ExtractionError::schema(format!(
            "task '{}': `depends_on` must be an array, got {}",
            id,
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
