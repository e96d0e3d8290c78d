//! Dependency graph construction.
//!
//! Turns a task list and a dependency edge list into the adjacency and
//! in-degree maps the topological scheduler consumes.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::HashMap;

use crate::models::{Dependency, Task};

/// Adjacency representation of the task precedence graph.
///
/// Maps each prerequisite to the tasks waiting on it (in input-edge order)
/// and tracks the count of unmet prerequisites per task. Every task from
/// the input list is present, at degree 0 if nothing depends on it.
///
/// Edges referencing IDs absent from the task list are tolerated silently:
/// they contribute adjacency entries and degree counts for IDs that never
/// get scheduled. This is a documented quirk, not a failure.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    adjacency: HashMap<String, Vec<String>>,
    in_degree: HashMap<String, u32>,
}

impl DependencyGraph {
    /// Builds the graph from tasks and dependency edges.
    pub fn build(tasks: &[Task], dependencies: &[Dependency]) -> Self {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        let mut in_degree: HashMap<String, u32> = HashMap::new();

        for task in tasks {
            adjacency.entry(task.id.clone()).or_default();
            in_degree.entry(task.id.clone()).or_insert(0);
        }

        for dep in dependencies {
            adjacency
                .entry(dep.depends_on_id.clone())
                .or_default()
                .push(dep.task_id.clone());
            *in_degree.entry(dep.task_id.clone()).or_insert(0) += 1;
        }

        Self {
            adjacency,
            in_degree,
        }
    }

    /// Tasks directly waiting on `id`, in input-edge order.
    pub fn dependents(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count of unmet prerequisites for `id` (0 if unknown).
    pub fn in_degree(&self, id: &str) -> u32 {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// The full in-degree map, for algorithms that reduce it iteratively.
    pub fn in_degrees(&self) -> &HashMap<String, u32> {
        &self.in_degree
    }
}
