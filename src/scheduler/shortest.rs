//! Shortest-duration-first scheduler.
//!
//! Re-sorts the topological order by duration ascending (stable) and
//! assigns sequential windows. Minimizes average completion time at the
//! cost of the same layered-design caveat as the other re-ordering
//! schedulers: the re-sort does not re-check dependencies.
//!
//! # Reference
//! Smith (1956), optimal for mean flow time on a single machine.

use super::{assign_sequential, topological};
use crate::models::{Dependency, ScheduledTask, Task};

pub(crate) fn run(
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> (Vec<ScheduledTask>, Vec<String>) {
    let (topo, excluded) = topological::run(tasks, dependencies, start_ms);

    let mut order: Vec<Task> = topo.into_iter().map(|s| s.task).collect();
    order.sort_by_key(|t| t.duration_min);

    (assign_sequential(order, start_ms), excluded)
}
