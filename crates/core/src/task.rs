//! Task Model
//!
//! Action items attributed to the transcript's designated user, and the
//! validated collection produced for one transcript.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, ExtractionResult};

/// Owner of an extracted task.
///
/// Only tasks attributable to the designated user are ever extracted, so the
/// owner is a fixed role marker rather than a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskOwner {
    #[default]
    #[serde(rename = "me")]
    Me,
}

impl std::fmt::Display for TaskOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskOwner::Me => write!(f, "me"),
        }
    }
}

/// Task deadline: an ISO calendar date or the explicit unknown marker.
///
/// Serialized as `"YYYY-MM-DD"` or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<NaiveDate>", into = "Option<NaiveDate>")]
pub enum Deadline {
    Date(NaiveDate),
    #[default]
    Unknown,
}

impl Deadline {
    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse_iso(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .ok()
            .map(Deadline::Date)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Deadline::Unknown)
    }
}

impl From<Option<NaiveDate>> for Deadline {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map(Deadline::Date).unwrap_or(Deadline::Unknown)
    }
}

impl From<Deadline> for Option<NaiveDate> {
    fn from(value: Deadline) -> Self {
        match value {
            Deadline::Date(date) => Some(date),
            Deadline::Unknown => None,
        }
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deadline::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Deadline::Unknown => write!(f, "unknown"),
        }
    }
}

/// One inferred action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-meaningful identifier such as `"T1"`
    pub id: String,
    /// Short human-readable label
    pub title: String,
    /// Free-text elaboration, empty when the model gave none
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub owner: TaskOwner,
    #[serde(default)]
    pub deadline: Deadline,
    /// Ids this task waits on, in the order the model listed them
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl Task {
    /// Create a task with defaults for every optional field
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            detail: String::new(),
            owner: TaskOwner::Me,
            deadline: Deadline::Unknown,
            depends_on: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = deps.into_iter().map(Into::into).collect();
        self
    }
}

/// Validated, immutable collection of tasks for one transcript.
///
/// Task ids are unique within a set; duplicates are rejected at construction
/// rather than deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Build a task set, rejecting duplicated ids.
    pub fn new(tasks: Vec<Task>) -> ExtractionResult<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(ExtractionError::schema(format!(
                    "duplicate task id '{}'",
                    task.id
                )));
            }
        }
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fail with [`ExtractionError::EmptyTaskSet`] when no task was extracted.
    pub fn ensure_not_empty(self) -> ExtractionResult<Self> {
        if self.tasks.is_empty() {
            Err(ExtractionError::EmptyTaskSet)
        } else {
            Ok(self)
        }
    }

    /// `(task_id, dependency_id)` pairs whose dependency is not in the set.
    ///
    /// Dangling references are legal; this is for callers that want to look.
    pub fn dangling_dependencies(&self) -> Vec<(&str, &str)> {
        let known: HashSet<&str> = self.tasks.iter().map(|t| t.id.as_str()).collect();
        self.tasks
            .iter()
            .flat_map(|t| {
                t.depends_on
                    .iter()
                    .filter(|dep| !known.contains(dep.as_str()))
                    .map(move |dep| (t.id.as_str(), dep.as_str()))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
