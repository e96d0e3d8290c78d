//! Input validation for scheduling problems.
//!
//! Checks the structural integrity of a task/dependency snapshot before it
//! reaches the scheduler. The scheduler itself never re-validates: it is
//! designed to degrade silently on bad input, so acyclicity and reference
//! integrity are enforced here, at the boundary. Detects:
//! - Duplicate task IDs
//! - Self-dependencies and duplicate edges
//! - Edges referencing tasks that don't exist
//! - Circular dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, HashSet};

use crate::models::{Dependency, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task depends on itself.
    SelfDependency,
    /// The same edge appears more than once.
    DuplicateDependency,
    /// An edge references a task that doesn't exist.
    UnknownTask,
    /// The dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task/dependency snapshot.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No self-dependencies
/// 3. No duplicate edges
/// 4. Both endpoints of every edge exist in the task list
/// 5. The dependency graph is acyclic
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], dependencies: &[Dependency]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
    }

    let mut seen_edges = HashSet::new();
    for dep in dependencies {
        if dep.task_id == dep.depends_on_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfDependency,
                format!("Task '{}' depends on itself", dep.task_id),
            ));
        }

        if !seen_edges.insert((dep.task_id.as_str(), dep.depends_on_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDependency,
                format!(
                    "Duplicate dependency: '{}' on '{}'",
                    dep.task_id, dep.depends_on_id
                ),
            ));
        }

        for id in [&dep.task_id, &dep.depends_on_id] {
            if !task_ids.contains(id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTask,
                    format!("Dependency references unknown task '{id}'"),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(dependencies) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// # Algorithm
/// Depth-first traversal over the "unblocks" relation. A back-edge
/// (visiting a node currently on the recursion stack) means a cycle.
fn detect_cycles(dependencies: &[Dependency]) -> Option<ValidationError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_ids: HashSet<&str> = HashSet::new();

    for dep in dependencies {
        all_ids.insert(&dep.task_id);
        all_ids.insert(&dep.depends_on_id);
        adj.entry(dep.depends_on_id.as_str())
            .or_default()
            .push(dep.task_id.as_str());
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
