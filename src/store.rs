//! Per-user in-memory repository for tasks, dependencies, and schedules.
//!
//! The boundary layer the scheduler relies on: it owns CRUD over the three
//! collections and rejects every edge that would make the dependency graph
//! unschedulable (self-dependency, duplicate, unknown endpoint, cycle).
//! The scheduler only ever receives plain, already-scoped-to-one-user
//! slices from here and never branches on users itself.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::models::{Dependency, Schedule, Task};

/// Errors from repository mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A task with this ID already exists for the user.
    #[error("task '{0}' already exists")]
    DuplicateTask(String),
    /// No task with this ID exists for the user.
    #[error("unknown task '{0}'")]
    UnknownTask(String),
    /// A task cannot depend on itself.
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(String),
    /// The edge is already present.
    #[error("dependency of '{task_id}' on '{depends_on_id}' already exists")]
    DuplicateDependency {
        /// The dependent task.
        task_id: String,
        /// The prerequisite task.
        depends_on_id: String,
    },
    /// No such edge exists between the two tasks.
    #[error("no dependency of '{task_id}' on '{depends_on_id}'")]
    UnknownDependency {
        /// The dependent task.
        task_id: String,
        /// The prerequisite task.
        depends_on_id: String,
    },
    /// Committing the edge would close a dependency cycle.
    #[error("dependency of '{task_id}' on '{depends_on_id}' would create a cycle")]
    CycleDetected {
        /// The dependent task.
        task_id: String,
        /// The prerequisite task.
        depends_on_id: String,
    },
}

#[derive(Debug, Default)]
struct UserData {
    tasks: Vec<Task>,
    dependencies: Vec<Dependency>,
    schedules: Vec<Schedule>,
}

/// In-memory repository partitioned by user ID.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: HashMap<String, UserData>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task for the user. Fails on a duplicate ID.
    pub fn add_task(&mut self, user_id: &str, task: Task) -> Result<(), StoreError> {
        let data = self.users.entry(user_id.to_string()).or_default();
        if data.tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::DuplicateTask(task.id));
        }
        debug!(user_id, task_id = %task.id, "task added");
        data.tasks.push(task);
        Ok(())
    }

    /// Replaces an existing task, matched by ID.
    pub fn update_task(&mut self, user_id: &str, task: Task) -> Result<(), StoreError> {
        let data = self.users.entry(user_id.to_string()).or_default();
        match data.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(StoreError::UnknownTask(task.id)),
        }
    }

    /// Removes a task and every edge touching it.
    pub fn remove_task(&mut self, user_id: &str, task_id: &str) -> Result<(), StoreError> {
        let data = self.users.entry(user_id.to_string()).or_default();
        let before = data.tasks.len();
        data.tasks.retain(|t| t.id != task_id);
        if data.tasks.len() == before {
            return Err(StoreError::UnknownTask(task_id.to_string()));
        }
        data.dependencies
            .retain(|d| d.task_id != task_id && d.depends_on_id != task_id);
        debug!(user_id, task_id, "task removed with its edges");
        Ok(())
    }

    /// The user's tasks, in insertion order.
    pub fn tasks(&self, user_id: &str) -> &[Task] {
        self.users
            .get(user_id)
            .map(|d| d.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// The user's dependency edges, in insertion order.
    pub fn dependencies(&self, user_id: &str) -> &[Dependency] {
        self.users
            .get(user_id)
            .map(|d| d.dependencies.as_slice())
            .unwrap_or(&[])
    }

    /// Records that `task_id` depends on `depends_on_id`.
    ///
    /// Rejected when the edge is a self-dependency, a duplicate, references
    /// an unknown task, or would close a cycle (checked by reachability
    /// from the prerequisite back to the dependent over existing edges).
    pub fn add_dependency(
        &mut self,
        user_id: &str,
        task_id: &str,
        depends_on_id: &str,
    ) -> Result<(), StoreError> {
        if task_id == depends_on_id {
            return Err(StoreError::SelfDependency(task_id.to_string()));
        }

        let data = self.users.entry(user_id.to_string()).or_default();
        for id in [task_id, depends_on_id] {
            if !data.tasks.iter().any(|t| t.id == id) {
                return Err(StoreError::UnknownTask(id.to_string()));
            }
        }
        if data
            .dependencies
            .iter()
            .any(|d| d.task_id == task_id && d.depends_on_id == depends_on_id)
        {
            return Err(StoreError::DuplicateDependency {
                task_id: task_id.to_string(),
                depends_on_id: depends_on_id.to_string(),
            });
        }
        if would_create_cycle(&data.dependencies, task_id, depends_on_id) {
            return Err(StoreError::CycleDetected {
                task_id: task_id.to_string(),
                depends_on_id: depends_on_id.to_string(),
            });
        }

        debug!(user_id, task_id, depends_on_id, "dependency added");
        data.dependencies
            .push(Dependency::new(task_id, depends_on_id));
        Ok(())
    }

    /// Removes an edge, matched by both endpoints.
    pub fn remove_dependency(
        &mut self,
        user_id: &str,
        task_id: &str,
        depends_on_id: &str,
    ) -> Result<(), StoreError> {
        let data = self.users.entry(user_id.to_string()).or_default();
        let before = data.dependencies.len();
        data.dependencies
            .retain(|d| !(d.task_id == task_id && d.depends_on_id == depends_on_id));
        if data.dependencies.len() == before {
            return Err(StoreError::UnknownDependency {
                task_id: task_id.to_string(),
                depends_on_id: depends_on_id.to_string(),
            });
        }
        Ok(())
    }

    /// Persists a produced schedule under the user.
    pub fn save_schedule(&mut self, user_id: &str, schedule: Schedule) {
        debug!(user_id, schedule_id = %schedule.id, "schedule saved");
        self.users
            .entry(user_id.to_string())
            .or_default()
            .schedules
            .push(schedule);
    }

    /// The user's saved schedules, in insertion order.
    pub fn schedules(&self, user_id: &str) -> &[Schedule] {
        self.users
            .get(user_id)
            .map(|d| d.schedules.as_slice())
            .unwrap_or(&[])
    }
}

/// Whether adding "`task_id` depends on `depends_on_id`" closes a cycle.
///
/// Walks the depends-on relation from the candidate prerequisite; reaching
/// the candidate dependent means the new edge would complete a loop.
fn would_create_cycle(dependencies: &[Dependency], task_id: &str, depends_on_id: &str) -> bool {
    let mut visited = std::collections::HashSet::new();
    let mut stack = vec![depends_on_id];

    while let Some(current) = stack.pop() {
        if current == task_id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        for dep in dependencies.iter().filter(|d| d.task_id == current) {
            stack.push(dep.depends_on_id.as_str());
        }
    }
    false
}
