//! Simulation performance metrics.
//!
//! Computes standard CPU scheduling indicators from the final process
//! states and the execution trace.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | ticks ready but not running |
//! | Response | first run - arrival |
//! | Makespan | ticks elapsed in the trace |
//! | CPU Utilization | busy ticks / makespan |
//! | Context Switches | process-to-process handoffs |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{Process, ProcessId, Ticks, Trace};

/// Final figures for one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl ProcessMetrics {
    /// Extracts metrics from a completed process. `None` while pending.
    pub fn from_process(process: &Process) -> Option<Self> {
        let completion_time = process.completion_time()?;
        Some(Self {
            id: process.id(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            completion_time,
            turnaround_time: completion_time - process.arrival_time(),
            waiting_time: process.waiting_time(),
            response_time: process.response_time().unwrap_or(0),
        })
    }
}

/// Aggregate simulation indicators.
///
/// Averages are taken over the processes in `processes`: all of them after
/// termination, only the completed ones for partial metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    /// Ticks elapsed since the last reset.
    pub makespan: Ticks,
    pub busy_ticks: Ticks,
    pub idle_ticks: Ticks,
    /// Fraction of ticks with a running process (0.0..1.0).
    pub cpu_utilization: f64,
    pub context_switches: u64,
    /// Per-process figures, in submission order.
    pub processes: Vec<ProcessMetrics>,
}

impl SimulationMetrics {
    /// Computes metrics over the completed processes.
    ///
    /// # Errors
    /// - [`SchedulerError::NoProcesses`] if `processes` is empty
    /// - [`SchedulerError::NoCompletedProcesses`] if none has finished
    pub fn calculate(processes: &[Process], trace: &Trace) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedulerError::NoProcesses);
        }

        let completed: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(ProcessMetrics::from_process)
            .collect();
        if completed.is_empty() {
            return Err(SchedulerError::NoCompletedProcesses);
        }

        let count = completed.len() as f64;
        let total_waiting: Ticks = completed.iter().map(|m| m.waiting_time).sum();
        let total_turnaround: Ticks = completed.iter().map(|m| m.turnaround_time).sum();
        let total_response: Ticks = completed.iter().map(|m| m.response_time).sum();

        let makespan = trace.len() as Ticks;
        let busy_ticks = trace.busy_ticks();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_ticks as f64 / makespan as f64
        };

        Ok(Self {
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            average_response_time: total_response as f64 / count,
            makespan,
            busy_ticks,
            idle_ticks: trace.idle_ticks(),
            cpu_utilization,
            context_switches: trace.context_switches(),
            processes: completed,
        })
    }

    /// Average waiting time with two decimals, e.g. `"1.50"`.
    pub fn display_average_waiting(&self) -> String {
        format!("{:.2}", self.average_waiting_time)
    }

    /// Average turnaround time with two decimals.
    pub fn display_average_turnaround(&self) -> String {
        format!("{:.2}", self.average_turnaround_time)
    }

    /// Metrics for a single process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == id)
    }
}
