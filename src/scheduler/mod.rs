//! Preemptive SRT scheduler and performance metrics.
//!
//! # Algorithm
//!
//! `SrtScheduler` advances one tick per call. Each tick it runs the ready
//! process with the least remaining time, ages every other ready process
//! by one waiting tick, and records the outcome in the trace.
//!
//! # Metrics
//!
//! `SimulationMetrics` reports average waiting and turnaround time, plus
//! makespan, CPU utilization, and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod config;
mod metrics;
mod srt;

pub use config::{SchedulerConfig, TieBreak};
pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use srt::{SrtScheduler, TickReport};
