//! Priority-maximizing selection scheduler.
//!
//! Re-sorts the topological order by priority descending, then runs a
//! one-dimensional include/exclude pass maximizing the cumulative priority
//! total. Any task with positive priority strictly improves the total, so
//! in practice every such task is selected; tasks at priority 0 or below
//! are dropped and surfaced through the excluded-ID list.
//!
//! Dependency ordering is applied once as the seed and then discarded by
//! the re-sort: a dependent can land before its prerequisite in the final
//! timeline. This is a property of the layered design, kept deliberately —
//! see the crate documentation.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1
//! (weighted interval scheduling, degenerate non-overlapping form)

use super::{assign_sequential, topological};
use crate::models::{Dependency, ScheduledTask, Task};

pub(crate) fn run(
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> (Vec<ScheduledTask>, Vec<String>) {
    let (topo, mut excluded) = topological::run(tasks, dependencies, start_ms);

    // Stable sort: priority ties keep their topological relative order.
    let mut order: Vec<Task> = topo.into_iter().map(|s| s.task).collect();
    order.sort_by(|a, b| b.priority.cmp(&a.priority));

    // Include a task whenever doing so strictly beats carrying the
    // previous best total forward.
    let mut best: i64 = 0;
    let mut selected = vec![false; order.len()];
    for (i, task) in order.iter().enumerate() {
        let with_task = best + i64::from(task.priority);
        if with_task > best {
            best = with_task;
            selected[i] = true;
        }
    }

    let mut included = Vec::with_capacity(order.len());
    for (task, keep) in order.into_iter().zip(selected) {
        if keep {
            included.push(task);
        } else {
            excluded.push(task.id);
        }
    }

    (assign_sequential(included, start_ms), excluded)
}
