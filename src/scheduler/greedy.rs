//! Greedy priority/deadline scheduler.
//!
//! Re-sorts the topological order by priority descending, breaking ties by
//! earlier deadline. Two equal-priority tasks where either lacks a deadline
//! compare equal, so stability leaves them in topological relative order.
//!
//! Same layered-design caveat as the priority-selection scheduler: the
//! re-sort discards dependency ordering.

use std::cmp::Ordering;

use super::{assign_sequential, topological};
use crate::models::{Dependency, ScheduledTask, Task};

pub(crate) fn run(
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> (Vec<ScheduledTask>, Vec<String>) {
    let (topo, excluded) = topological::run(tasks, dependencies, start_ms);

    let mut order: Vec<Task> = topo.into_iter().map(|s| s.task).collect();
    order.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| match (a.deadline, b.deadline) {
                (Some(da), Some(db)) => da.cmp(&db),
                _ => Ordering::Equal,
            })
    });

    (assign_sequential(order, start_ms), excluded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, duration_min: u32, priority: i32, deadline: Option<i64>) -> Task {
        let task = Task::new(id).with_duration(duration_min).with_priority(priority);
        match deadline {
            Some(d) => task.with_deadline(d),
            None => task,
        }
    }

    #[test]
    fn test_priority_first() {
        let tasks = vec![
            make_task("low", 10, 1, None),
            make_task("high", 10, 5, None),
        ];

        let (scheduled, _) = run(&tasks, &[], 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["high", "low"]);
    }

    #[test]
    fn test_deadline_breaks_priority_ties() {
        let tasks = vec![
            make_task("later", 10, 3, Some(5_000_000)),
            make_task("sooner", 10, 3, Some(1_000_000)),
        ];

        let (scheduled, _) = run(&tasks, &[], 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["sooner", "later"]);
    }

    #[test]
    fn test_deadline_less_ties_stay_stable() {
        // Neither has a deadline: no defined order beyond stability, so the
        // topological (here, input) order survives.
        let tasks = vec![
            make_task("first", 10, 3, None),
            make_task("second", 10, 3, None),
        ];

        let (scheduled, _) = run(&tasks, &[], 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_mixed_deadline_tie_compares_equal() {
        let tasks = vec![
            make_task("no-deadline", 10, 3, None),
            make_task("with-deadline", 10, 3, Some(1_000)),
        ];

        let (scheduled, _) = run(&tasks, &[], 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["no-deadline", "with-deadline"]);
    }

    #[test]
    fn test_resort_may_violate_dependencies() {
        let tasks = vec![
            make_task("base", 10, 1, None),
            make_task("dep", 10, 5, None),
        ];
        let deps = vec![Dependency::new("dep", "base")];

        let (scheduled, _) = run(&tasks, &deps, 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["dep", "base"]);
    }

    #[test]
    fn test_excluded_carries_over_from_seed() {
        let tasks = vec![make_task("A", 10, 5, None), make_task("B", 10, 5, None)];
        let deps = vec![Dependency::new("B", "missing")];

        let (scheduled, excluded) = run(&tasks, &deps, 0);
        assert_eq!(scheduled.len(), 1);
        assert_eq!(excluded, ["B"]);
    }
}
