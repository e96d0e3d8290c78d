//! Task model.
//!
//! A task is the unit of work to be scheduled: a processing duration,
//! an urgency priority, and an optional completion deadline.

use serde::{Deserialize, Serialize};

/// A task to be scheduled.
///
/// Tasks are immutable inputs to the scheduler; editing happens in the
/// repository layer before scheduling begins.
///
/// # Time Representation
/// Durations are in whole minutes. Deadlines and schedule clocks are in
/// milliseconds relative to a scheduling epoch (t=0). The consumer defines
/// what t=0 means (e.g., start of the working day, midnight UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Processing duration in minutes.
    pub duration_min: u32,
    /// Scheduling priority on a 1..=5 scale (5 = most urgent).
    pub priority: i32,
    /// Latest completion time (ms). `None` = no deadline.
    pub deadline: Option<i64>,
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            duration_min: 0,
            priority: 0,
            deadline: None,
        }
    }

    /// Sets the task title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the processing duration in minutes.
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline (latest completion time in ms).
    pub fn with_deadline(mut self, deadline_ms: i64) -> Self {
        self.deadline = Some(deadline_ms);
        self
    }

    /// Processing duration converted to the schedule clock unit (ms).
    pub fn duration_ms(&self) -> i64 {
        i64::from(self.duration_min) * 60_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1")
            .with_title("Write report")
            .with_description("Quarterly summary")
            .with_duration(45)
            .with_priority(4)
            .with_deadline(3_600_000);

        assert_eq!(task.id, "T1");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description.as_deref(), Some("Quarterly summary"));
        assert_eq!(task.duration_min, 45);
        assert_eq!(task.priority, 4);
        assert_eq!(task.deadline, Some(3_600_000));
    }

    #[test]
    fn test_duration_conversion() {
        let task = Task::new("T1").with_duration(30);
        assert_eq!(task.duration_ms(), 1_800_000);
    }

    #[test]
    fn test_task_defaults() {
        let task = Task::new("bare");
        assert_eq!(task.duration_min, 0);
        assert_eq!(task.priority, 0);
        assert!(task.deadline.is_none());
        assert!(task.description.is_none());
    }
}
