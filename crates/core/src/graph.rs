//! Dependency Graph
//!
//! Derives the task dependency graph and renders it as Mermaid flowchart
//! text. Nodes come first, then edges, both in original task order. No
//! sorting, no edge dedup, no cycle detection, and no check that edge
//! endpoints were declared as nodes.

use serde::Serialize;

use crate::task::TaskSet;

/// Flowchart header (left-to-right layout).
pub const GRAPH_HEADER: &str = "graph LR";

const INDENT: &str = "  ";

/// A node: task id plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// A directed edge `from --> to`: `to` cannot start before `from` completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Graph derived from a task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// One node per task, one edge per `depends_on` entry.
    pub fn from_task_set(task_set: &TaskSet) -> Self {
        let nodes = task_set
            .iter()
            .map(|task| GraphNode {
                id: task.id.clone(),
                label: task.title.clone(),
            })
            .collect();

        let edges = task_set
            .iter()
            .flat_map(|task| {
                task.depends_on.iter().map(move |dep| GraphEdge {
                    from: dep.clone(),
                    to: task.id.clone(),
                })
            })
            .collect();

        Self { nodes, edges }
    }

    /// Render as Mermaid flowchart text (no trailing newline).
    pub fn to_mermaid(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.nodes.len() + self.edges.len());
        lines.push(GRAPH_HEADER.to_string());

        for node in &self.nodes {
            lines.push(format!("{}{}[\"{}\"]", INDENT, node.id, escape_label(&node.label)));
        }

        for edge in &self.edges {
            lines.push(format!("{}{} --> {}", INDENT, edge.from, edge.to));
        }

        lines.join("\n")
    }
}

/// Render a task set straight to Mermaid text.
pub fn render_mermaid(task_set: &TaskSet) -> String {
    DependencyGraph::from_task_set(task_set).to_mermaid()
}

/// Escape a label for use inside a double-quoted Mermaid node label.
///
/// Mermaid has no backslash escapes; quotes become the `#quot;` entity code.
pub fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}
