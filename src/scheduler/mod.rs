//! Scheduling algorithms and their shared entry point.
//!
//! Four interchangeable algorithms over the same dependency-respecting
//! search space:
//!
//! - **Topological**: Kahn's algorithm, input order among unblocked tasks.
//! - **Priority selection**: priority-maximizing include/exclude pass over
//!   the priority-sorted topological order.
//! - **Greedy**: priority descending, ties by earlier deadline.
//! - **Shortest duration**: duration ascending.
//!
//! Every call is a pure, blocking, deterministic computation over its own
//! input snapshot. Running the same algorithm twice on identical input
//! yields identical schedules; only the execution-time measurement varies.
//!
//! The three re-ordering algorithms seed from the topological order and
//! then fully re-sort it, so their final timelines can place a dependent
//! before its prerequisite. Kept as documented behavior of the layered
//! design rather than silently "fixed".

mod greedy;
mod metrics;
mod priority_selection;
mod shortest;
mod topological;

pub use metrics::{rank_algorithms, AlgorithmRanking, ScheduleMetrics};

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Dependency, ScheduledTask, Task};

/// Selects which scheduling algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Dependency-respecting order (Kahn's algorithm).
    Topological,
    /// Priority-maximizing selection over the priority-sorted order.
    PrioritySelection,
    /// Priority descending, deadline tie-break.
    Greedy,
    /// Duration ascending.
    ShortestDuration,
}

impl Algorithm {
    /// All algorithms, in comparison-run order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Topological,
        Algorithm::PrioritySelection,
        Algorithm::Greedy,
        Algorithm::ShortestDuration,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Topological => "topological",
            Algorithm::PrioritySelection => "priority-selection",
            Algorithm::Greedy => "greedy",
            Algorithm::ShortestDuration => "shortest-duration",
        }
    }
}

/// Result of one scheduling call.
///
/// Tasks that could not be placed (an upstream cycle, an edge naming a
/// nonexistent task, or de-selection by the priority-selection pass) are
/// not an error: they are simply absent from `scheduled` and listed in
/// `excluded` for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Scheduled tasks in execution order, contiguous from the start time.
    pub scheduled: Vec<ScheduledTask>,
    /// IDs of input tasks absent from the schedule, in input order.
    pub excluded: Vec<String>,
    /// Summary statistics, including the measured execution time.
    pub metrics: ScheduleMetrics,
}

/// Computes a schedule with the selected algorithm.
///
/// `start_ms` is the start time of the first scheduled task; every later
/// task starts exactly when its predecessor ends. The call never fails:
/// malformed dependency input degrades to a partial schedule (see
/// [`ScheduleOutcome::excluded`]).
pub fn schedule(
    algorithm: Algorithm,
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> ScheduleOutcome {
    let started = Instant::now();

    let (scheduled, excluded) = match algorithm {
        Algorithm::Topological => topological::run(tasks, dependencies, start_ms),
        Algorithm::PrioritySelection => priority_selection::run(tasks, dependencies, start_ms),
        Algorithm::Greedy => greedy::run(tasks, dependencies, start_ms),
        Algorithm::ShortestDuration => shortest::run(tasks, dependencies, start_ms),
    };

    let execution_time_ms = started.elapsed().as_secs_f64() * 1_000.0;
    let metrics = ScheduleMetrics::calculate(&scheduled, execution_time_ms);

    debug!(
        algorithm = algorithm.name(),
        scheduled = scheduled.len(),
        excluded = excluded.len(),
        execution_time_ms,
        "schedule computed"
    );

    ScheduleOutcome {
        scheduled,
        excluded,
        metrics,
    }
}

/// Runs all four algorithms on the same input snapshot and ranks them.
///
/// No algorithm observes another's execution; each receives the identical
/// immutable input. See [`rank_algorithms`] for the scoring rules.
pub fn compare(
    tasks: &[Task],
    dependencies: &[Dependency],
    start_ms: i64,
) -> Vec<AlgorithmRanking> {
    let results = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let outcome = schedule(algorithm, tasks, dependencies, start_ms);
            (algorithm, outcome.metrics)
        })
        .collect();

    rank_algorithms(results)
}

/// Assigns contiguous execution windows to `tasks` beginning at `start_ms`.
pub(crate) fn assign_sequential(
    tasks: impl IntoIterator<Item = Task>,
    start_ms: i64,
) -> Vec<ScheduledTask> {
    let mut clock = start_ms;
    tasks
        .into_iter()
        .map(|task| {
            let placed = ScheduledTask::new(task, clock);
            clock = placed.end_ms;
            placed
        })
        .collect()
}
