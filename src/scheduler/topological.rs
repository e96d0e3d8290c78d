//! Topological scheduler (Kahn's algorithm).
//!
//! Orders tasks so that every prerequisite precedes its dependents, then
//! assigns contiguous execution windows from the supplied start time.
//! Foundation for the re-ordering schedulers layered on top of it.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks";
//! Cormen et al. (2009), Ch. 22.4

use std::collections::{HashMap, VecDeque};

use crate::graph::DependencyGraph;
use crate::models::{Dependency, ScheduledTask, Task};

/// Runs Kahn's algorithm and assigns sequential times.
///
/// The working queue is seeded with every zero-in-degree task in task-list
/// order and processed FIFO: order among simultaneously unblocked tasks is
/// input order, not priority. Tasks that never reach in-degree zero (an
/// upstream cycle, or an edge naming a task that does not exist) are left
/// out of the schedule and reported in the returned excluded-ID list.
pub(crate) fn run(
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> (Vec<ScheduledTask>, Vec<String>) {
    let graph = DependencyGraph::build(tasks, dependencies);
    let mut in_degree = graph.in_degrees().clone();
    let task_map: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut queue: VecDeque<&str> = tasks
        .iter()
        .filter(|t| graph.in_degree(&t.id) == 0)
        .map(|t| t.id.as_str())
        .collect();

    let mut scheduled = Vec::with_capacity(tasks.len());
    let mut clock = start_ms;

    while let Some(id) = queue.pop_front() {
        // IDs introduced only by malformed edges have no task to schedule.
        let Some(&task) = task_map.get(id) else {
            continue;
        };

        let placed = ScheduledTask::new(task.clone(), clock);
        clock = placed.end_ms;
        scheduled.push(placed);

        for dependent in graph.dependents(id) {
            let degree = in_degree.entry(dependent.clone()).or_insert(0);
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                queue.push_back(dependent.as_str());
            }
        }
    }

    let excluded = excluded_ids(tasks, &scheduled);
    (scheduled, excluded)
}

/// IDs of input tasks absent from the produced schedule, in input order.
pub(crate) fn excluded_ids(tasks: &[Task], scheduled: &[ScheduledTask]) -> Vec<String> {
    let placed: std::collections::HashSet<&str> =
        scheduled.iter().map(|s| s.task.id.as_str()).collect();
    tasks
        .iter()
        .filter(|t| !placed.contains(t.id.as_str()))
        .map(|t| t.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, duration_min: u32) -> Task {
        Task::new(id).with_duration(duration_min).with_priority(3)
    }

    /// 09:00 as ms from a midnight epoch.
    const NINE_AM: i64 = 9 * 3_600_000;

    #[test]
    fn test_prerequisites_precede_dependents() {
        let tasks = vec![
            make_task("A", 30),
            make_task("B", 60),
            make_task("C", 15),
        ];
        let deps = vec![Dependency::new("C", "A")];

        let (scheduled, excluded) = run(&tasks, &deps, NINE_AM);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();

        // A before B (both unblocked, input order), C only after A completes.
        assert_eq!(order, ["A", "B", "C"]);
        assert!(excluded.is_empty());

        assert_eq!(scheduled[0].start_ms, NINE_AM);
        assert_eq!(scheduled[0].end_ms, NINE_AM + 30 * 60_000);
        assert_eq!(scheduled[1].start_ms, NINE_AM + 30 * 60_000);
        assert_eq!(scheduled[1].end_ms, NINE_AM + 90 * 60_000);
        assert_eq!(scheduled[2].start_ms, NINE_AM + 90 * 60_000);
        assert_eq!(scheduled[2].end_ms, NINE_AM + 105 * 60_000);
    }

    #[test]
    fn test_acyclic_input_schedules_every_task() {
        let tasks = vec![
            make_task("A", 10),
            make_task("B", 10),
            make_task("C", 10),
            make_task("D", 10),
        ];
        let deps = vec![
            Dependency::new("B", "A"),
            Dependency::new("C", "A"),
            Dependency::new("D", "B"),
            Dependency::new("D", "C"),
        ];

        let (scheduled, excluded) = run(&tasks, &deps, 0);
        assert_eq!(scheduled.len(), tasks.len());
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_contiguous_windows() {
        let tasks = vec![make_task("A", 20), make_task("B", 5), make_task("C", 45)];
        let (scheduled, _) = run(&tasks, &[], 12_345);

        assert_eq!(scheduled[0].start_ms, 12_345);
        for pair in scheduled.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
    }

    #[test]
    fn test_cycle_members_silently_excluded() {
        let tasks = vec![make_task("A", 10), make_task("B", 10), make_task("C", 10)];
        let deps = vec![
            Dependency::new("B", "C"),
            Dependency::new("C", "B"), // B and C block each other
        ];

        let (scheduled, excluded) = run(&tasks, &deps, 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["A"]);
        assert_eq!(excluded, ["B", "C"]);
    }

    #[test]
    fn test_unknown_prerequisite_blocks_dependent() {
        let tasks = vec![make_task("A", 10), make_task("B", 10)];
        let deps = vec![Dependency::new("B", "no-such-task")];

        let (scheduled, excluded) = run(&tasks, &deps, 0);
        let order: Vec<&str> = scheduled.iter().map(|s| s.task.id.as_str()).collect();
        assert_eq!(order, ["A"]);
        assert_eq!(excluded, ["B"]);
    }

    #[test]
    fn test_unknown_dependent_ignored() {
        // An edge whose dependent does not exist must not disturb real tasks.
        let tasks = vec![make_task("A", 10)];
        let deps = vec![Dependency::new("ghost", "A")];

        let (scheduled, excluded) = run(&tasks, &deps, 0);
        assert_eq!(scheduled.len(), 1);
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let (scheduled, excluded) = run(&[], &[], 0);
        assert!(scheduled.is_empty());
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let tasks = vec![make_task("A", 30), make_task("B", 60), make_task("C", 15)];
        let deps = vec![Dependency::new("C", "A")];

        let first = run(&tasks, &deps, NINE_AM);
        let second = run(&tasks, &deps, NINE_AM);
        assert_eq!(first, second);
    }
}
