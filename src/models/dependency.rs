//! Precedence constraint between two tasks.

use serde::{Deserialize, Serialize};

/// A directed dependency edge: `task_id` cannot start before
/// `depends_on_id` finishes.
///
/// Edges form a directed graph over task IDs. The repository layer is
/// responsible for keeping that graph acyclic; the scheduler does not
/// re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// The dependent task.
    pub task_id: String,
    /// The prerequisite task that must finish first.
    pub depends_on_id: String,
}

impl Dependency {
    /// Creates an edge meaning `task_id` depends on `depends_on_id`.
    pub fn new(task_id: impl Into<String>, depends_on_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            depends_on_id: depends_on_id.into(),
        }
    }
}
