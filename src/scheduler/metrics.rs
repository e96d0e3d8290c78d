//! Schedule metrics and algorithm ranking.
//!
//! Reduces a produced schedule into summary statistics and, for comparison
//! mode, blends deadline success with relative speed into a composite score
//! used to rank algorithms against each other.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Execution time | Wall time the algorithm itself took (fractional ms) |
//! | Total duration | Sum of scheduled task durations (minutes) |
//! | Tasks scheduled | Length of the produced schedule |
//! | Deadlines met | Tasks finishing at or before their deadline |
//! | Deadlines missed | Tasks finishing after their deadline |
//! | Average idle | Always 0: sequential scheduling leaves no gaps |

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::models::ScheduledTask;

/// Summary statistics over one produced schedule.
///
/// Deadlines are judged against each task's end time, not its start.
/// Tasks without a deadline count in neither deadline bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Wall-clock time the scheduling algorithm took (fractional ms).
    pub execution_time_ms: f64,
    /// Sum of scheduled task durations (minutes).
    pub total_duration_min: u32,
    /// Number of tasks in the schedule.
    pub tasks_scheduled: usize,
    /// Mean gap between consecutive tasks (ms). Zero by construction;
    /// retained for forward compatibility.
    pub average_idle_time_ms: f64,
    /// Tasks with a deadline that finish on time.
    pub deadlines_met: usize,
    /// Tasks with a deadline that finish late.
    pub deadlines_missed: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and an externally measured
    /// execution duration. An empty schedule yields all-zero counts.
    pub fn calculate(scheduled: &[ScheduledTask], execution_time_ms: f64) -> Self {
        let mut deadlines_met = 0;
        let mut deadlines_missed = 0;
        let mut total_duration_min: u32 = 0;

        for entry in scheduled {
            total_duration_min += entry.task.duration_min;
            if let Some(deadline) = entry.task.deadline {
                if entry.end_ms <= deadline {
                    deadlines_met += 1;
                } else {
                    deadlines_missed += 1;
                }
            }
        }

        Self {
            execution_time_ms,
            total_duration_min,
            tasks_scheduled: scheduled.len(),
            average_idle_time_ms: 0.0,
            deadlines_met,
            deadlines_missed,
        }
    }

    /// Percentage of scheduled tasks meeting their deadline (0 when
    /// nothing was scheduled).
    pub fn success_rate(&self) -> f64 {
        if self.tasks_scheduled == 0 {
            return 0.0;
        }
        self.deadlines_met as f64 / self.tasks_scheduled as f64 * 100.0
    }
}

/// One algorithm's position in a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRanking {
    /// The ranked algorithm.
    pub algorithm: Algorithm,
    /// Metrics of its schedule.
    pub metrics: ScheduleMetrics,
    /// Deadline success rate (0..=100).
    pub success_rate: f64,
    /// Speed relative to the slowest algorithm in the set (0..=100).
    pub speed_score: f64,
    /// Composite: `success_rate * 0.6 + speed_score * 0.4`.
    pub score: f64,
}

/// Ranks algorithms run on identical input, best composite score first.
///
/// Speed is normalized against the slowest run in the set; when every run
/// measured zero time the speed score resolves to 0 rather than dividing
/// by zero. Ties keep the order the results were supplied in.
pub fn rank_algorithms(results: Vec<(Algorithm, ScheduleMetrics)>) -> Vec<AlgorithmRanking> {
    let max_time = results
        .iter()
        .map(|(_, m)| m.execution_time_ms)
        .fold(0.0_f64, f64::max);

    let mut ranked: Vec<AlgorithmRanking> = results
        .into_iter()
        .map(|(algorithm, metrics)| {
            let success_rate = metrics.success_rate();
            let speed_score = if max_time > 0.0 {
                (1.0 - metrics.execution_time_ms / max_time) * 100.0
            } else {
                0.0
            };
            let score = success_rate * 0.6 + speed_score * 0.4;
            AlgorithmRanking {
                algorithm,
                metrics,
                success_rate,
                speed_score,
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
