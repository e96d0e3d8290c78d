//! Scheduled task and persistable schedule record.

use serde::{Deserialize, Serialize};

use super::Task;
use crate::scheduler::{Algorithm, ScheduleMetrics};

/// A task with its assigned execution window.
///
/// Within one produced schedule, windows are contiguous and non-overlapping:
/// each task starts exactly when the previous one ends (single-resource
/// sequential execution, no parallelism, no idle gaps by construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The scheduled task.
    pub task: Task,
    /// Assigned start time (ms).
    pub start_ms: i64,
    /// Assigned end time (ms): `start_ms + duration`.
    pub end_ms: i64,
}

impl ScheduledTask {
    /// Places `task` at `start_ms`; the end time follows from its duration.
    pub fn new(task: Task, start_ms: i64) -> Self {
        let end_ms = start_ms + task.duration_ms();
        Self {
            task,
            start_ms,
            end_ms,
        }
    }
}

/// A named, persistable schedule the repository stores per user.
///
/// Produced by the scheduler, then optionally saved with a user-chosen name.
/// Consumers treat the contained tasks and metrics as immutable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: String,
    /// User-chosen name.
    pub name: String,
    /// Algorithm that produced this schedule.
    pub algorithm: Algorithm,
    /// Schedule start time (ms).
    pub start_ms: i64,
    /// Scheduled tasks in execution order.
    pub tasks: Vec<ScheduledTask>,
    /// Metrics computed at scheduling time, if retained.
    pub metrics: Option<ScheduleMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_task_end_time() {
        let task = Task::new("T1").with_duration(30);
        let scheduled = ScheduledTask::new(task, 1_000_000);
        assert_eq!(scheduled.start_ms, 1_000_000);
        assert_eq!(scheduled.end_ms, 1_000_000 + 1_800_000);
    }

    #[test]
    fn test_zero_duration_task() {
        let scheduled = ScheduledTask::new(Task::new("instant"), 500);
        assert_eq!(scheduled.start_ms, scheduled.end_ms);
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let schedule = Schedule {
            id: "S1".into(),
            name: "Morning plan".into(),
            algorithm: Algorithm::Greedy,
            start_ms: 0,
            tasks: vec![ScheduledTask::new(Task::new("T1").with_duration(10), 0)],
            metrics: None,
        };

        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
