//! Shortest-Remaining-Time CPU scheduling simulator.
//!
//! Simulates preemptive SRT scheduling over a discrete time axis. Each call
//! to [`SrtScheduler::tick`](scheduler::SrtScheduler::tick) advances the
//! logical clock by one unit, runs the ready process with the least
//! remaining work, and appends one event to the Gantt trace.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TickEvent`, `Trace`, `GanttSegment`
//! - **`scheduler`**: The SRT engine, its configuration, and performance metrics
//! - **`validation`**: Submission integrity checks (duplicate IDs, zero bursts)
//! - **`workload`**: Seeded random process sets
//!
//! # Architecture
//!
//! The engine is a pure step function over `(clock, processes)`. Timing,
//! rendering, and input collection belong to the driver that calls it.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulerError};
