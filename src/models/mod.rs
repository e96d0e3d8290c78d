//! Scheduling domain models.
//!
//! Core data types for scheduling inputs and outputs: tasks, precedence
//! edges between them, and tasks with assigned execution windows.
//!
//! All entities are plain values. They are constructed fresh for each
//! scheduling call and nothing outlives the call except the produced
//! schedule, which the repository layer may persist as a named record.

mod dependency;
mod schedule;
mod task;

pub use dependency::Dependency;
pub use schedule::{Schedule, ScheduledTask};
pub use task::Task;
