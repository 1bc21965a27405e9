//! Process model.
//!
//! A process is one schedulable task: it arrives at a tick, needs a fixed
//! number of CPU ticks, and accumulates waiting time while ready but not
//! running.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Externally assigned process identifier.
pub type ProcessId = u32;

/// Discrete simulation time unit.
pub type Ticks = u64;

/// A schedulable process and its runtime state.
///
/// Only `execute()` changes `remaining_time`. Waiting time, completion time,
/// and the started flag are owned by the scheduler.
///
/// # Invariants
/// - `0 <= remaining_time <= burst_time`
/// - `completion_time` is set exactly once, when `remaining_time` hits 0
/// - `started` never resets
///
/// Deserialization checks these invariants and rejects inconsistent records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProcessRecord")]
pub struct Process {
    id: ProcessId,
    arrival_time: Ticks,
    burst_time: Ticks,
    remaining_time: Ticks,
    waiting_time: Ticks,
    completion_time: Option<Ticks>,
    started: bool,
    first_run_time: Option<Ticks>,
}

impl Process {
    /// Creates a fresh process with `remaining_time = burst_time`.
    ///
    /// Burst validity is checked at submission, not here.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            waiting_time: 0,
            completion_time: None,
            started: false,
            first_run_time: None,
        }
    }

    /// Runs the process for one tick.
    ///
    /// # Errors
    /// Returns [`SchedulerError::AlreadyCompleted`] without touching state if
    /// the process has no remaining time.
    pub fn execute(&mut self) -> Result<()> {
        if self.is_completed() {
            return Err(SchedulerError::AlreadyCompleted(self.id));
        }
        self.remaining_time -= 1;
        Ok(())
    }

    /// Whether all burst time has been consumed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is ready at `now` (arrived and not completed).
    #[inline]
    pub fn is_ready_at(&self, now: Ticks) -> bool {
        self.arrival_time <= now && !self.is_completed()
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    pub fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    /// Tick boundary at which the process finished. `None` while pending.
    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Tick of the first execution. `None` until started.
    pub fn first_run_time(&self) -> Option<Ticks> {
        self.first_run_time
    }

    /// Ticks spent executing so far.
    #[inline]
    pub fn executed_time(&self) -> Ticks {
        self.burst_time - self.remaining_time
    }

    /// Turnaround time (completion - arrival). `None` while pending.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Response time (first run - arrival). `None` until started.
    pub fn response_time(&self) -> Option<Ticks> {
        self.first_run_time.map(|f| f - self.arrival_time)
    }

    pub(crate) fn mark_started(&mut self, now: Ticks) {
        if !self.started {
            self.started = true;
            self.first_run_time = Some(now);
        }
    }

    pub(crate) fn add_waiting_tick(&mut self) {
        self.waiting_time += 1;
    }

    pub(crate) fn set_completion_time(&mut self, time: Ticks) {
        debug_assert!(self.completion_time.is_none(), "completion time set twice");
        self.completion_time = Some(time);
    }
}

/// Unchecked wire form of [`Process`]. Not re-exported.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    id: ProcessId,
    arrival_time: Ticks,
    burst_time: Ticks,
    remaining_time: Ticks,
    #[serde(default)]
    waiting_time: Ticks,
    #[serde(default)]
    completion_time: Option<Ticks>,
    #[serde(default)]
    started: bool,
    #[serde(default)]
    first_run_time: Option<Ticks>,
}

impl TryFrom<ProcessRecord> for Process {
    type Error = ValidationError;

    fn try_from(r: ProcessRecord) -> std::result::Result<Self, Self::Error> {
        let invalid = |what: &str| {
            Err(ValidationError::new(
                ValidationErrorKind::InconsistentState,
                format!("Process {}: {what}", r.id),
            ))
        };

        if r.remaining_time > r.burst_time {
            return invalid("remaining time exceeds burst time");
        }
        if r.started != r.first_run_time.is_some() {
            return invalid("started flag disagrees with first run time");
        }
        if r.first_run_time.is_some_and(|f| f < r.arrival_time) {
            return invalid("first run before arrival");
        }
        match r.completion_time {
            Some(_) if r.remaining_time > 0 => {
                return invalid("completion time set with remaining time");
            }
            Some(c) if c < r.arrival_time.saturating_add(r.burst_time) => {
                return invalid("completion time earlier than arrival plus burst");
            }
            _ => {}
        }

        Ok(Self {
            id: r.id,
            arrival_time: r.arrival_time,
            burst_time: r.burst_time,
            remaining_time: r.remaining_time,
            waiting_time: r.waiting_time,
            completion_time: r.completion_time,
            started: r.started,
            first_run_time: r.first_run_time,
        })
    }
}
