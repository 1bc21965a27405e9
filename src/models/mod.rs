//! Simulation domain models.
//!
//! Provides the schedulable unit (`Process`) and the per-tick execution
//! record (`TickEvent`, `Trace`, `GanttSegment`) produced by the scheduler.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation start (t=0).

mod process;
mod trace;

pub use process::{Process, ProcessId, Ticks};
pub use trace::{GanttSegment, TickEvent, TickKind, Trace};
