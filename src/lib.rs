//! Dependency-aware sequential task scheduling.
//!
//! Computes execution schedules for tasks with durations, priorities,
//! optional deadlines, and precedence constraints. Four interchangeable
//! algorithms run over the same dependency-respecting search space, and a
//! metrics engine scores and ranks their outputs against each other.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Dependency`, `ScheduledTask`,
//!   `Schedule`
//! - **`graph`**: Adjacency/in-degree construction over the task graph
//! - **`scheduler`**: The four algorithms, dispatch entry point, metrics,
//!   and comparison ranking
//! - **`validation`**: Input integrity checks (duplicate IDs, DAG cycles)
//! - **`store`**: Per-user in-memory repository, the boundary layer that
//!   keeps the dependency graph acyclic before it reaches the scheduler
//!
//! # Execution Model
//!
//! Schedules are strictly sequential: one task at a time, each starting
//! exactly when its predecessor ends. Scheduling is a pure, blocking
//! computation with no shared state between calls. Unsatisfiable tasks
//! (an upstream cycle that slipped past the boundary, or an edge naming a
//! task that does not exist) are never an error — they are omitted from
//! the schedule and reported in the outcome's excluded-ID list.
//!
//! # Example
//!
//! ```
//! use seqsched::models::{Dependency, Task};
//! use seqsched::{schedule, Algorithm};
//!
//! let tasks = vec![
//!     Task::new("write").with_duration(30).with_priority(3),
//!     Task::new("review").with_duration(15).with_priority(5),
//! ];
//! let deps = vec![Dependency::new("review", "write")];
//!
//! let outcome = schedule(Algorithm::Topological, &tasks, &deps, 0);
//! assert_eq!(outcome.scheduled.len(), 2);
//! assert_eq!(outcome.scheduled[0].task.id, "write");
//! ```

pub mod graph;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use scheduler::{compare, schedule, Algorithm, ScheduleOutcome};
