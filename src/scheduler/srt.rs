//! Shortest-Remaining-Time scheduler.
//!
//! # Algorithm
//!
//! Per tick:
//! 1. Ready set = processes with `arrival <= now` and `remaining > 0`.
//! 2. Empty ready set → record IDLE.
//! 3. Otherwise select the minimum remaining time (ties per [`TieBreak`]),
//!    execute it for one tick, and add one waiting tick to every other
//!    ready process.
//! 4. A process that reaches zero remaining completes at `now + 1`.
//! 5. Advance the clock.
//!
//! # Complexity
//! O(n) per tick, where n = submitted processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::error::{Result, SchedulerError};
use crate::models::{Process, ProcessId, TickEvent, Ticks, Trace};
use crate::validation::validate_submissions;

use super::{SchedulerConfig, SimulationMetrics, TieBreak};

/// Outcome of one `tick()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Event recorded for this tick. `None` if the simulation had already
    /// terminated and nothing happened.
    pub event: Option<TickEvent>,
    /// Whether every process is now complete.
    pub all_completed: bool,
}

/// Preemptive SRT scheduling engine.
///
/// Owns the logical clock, every submitted process, and the trace. The
/// lifecycle is submit → tick* → metrics, with `reset()` returning to the
/// initial state at any point.
///
/// # Example
///
/// ```
/// use u_srt::scheduler::SrtScheduler;
///
/// let mut scheduler = SrtScheduler::new();
/// scheduler.submit(1, 0, 4).unwrap();
/// scheduler.submit(2, 1, 2).unwrap();
///
/// let ticks = scheduler.run_to_completion().unwrap();
/// assert_eq!(ticks, 6);
///
/// let metrics = scheduler.metrics().unwrap();
/// assert_eq!(metrics.display_average_waiting(), "1.00");
/// assert_eq!(metrics.display_average_turnaround(), "4.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SrtScheduler {
    config: SchedulerConfig,
    processes: Vec<Process>,
    current_time: Ticks,
    trace: Trace,
}

impl SrtScheduler {
    /// Creates a scheduler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Submits one process.
    ///
    /// # Errors
    /// - [`SchedulerError::Validation`] for a zero burst or duplicate ID
    /// - [`SchedulerError::SimulationStarted`] once the clock has advanced
    pub fn submit(&mut self, id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Result<()> {
        self.submit_all([Process::new(id, arrival_time, burst_time)])
    }

    /// Submits a process under the next free ID and returns that ID.
    ///
    /// The ID is `count + 1`, else one past the largest ID in use, else the
    /// lowest free ID.
    ///
    /// # Errors
    /// [`SchedulerError::IdSpaceExhausted`] if every `ProcessId` is taken.
    pub fn submit_auto(&mut self, arrival_time: Ticks, burst_time: Ticks) -> Result<ProcessId> {
        let id = self.next_free_id().ok_or(SchedulerError::IdSpaceExhausted)?;
        self.submit(id, arrival_time, burst_time)?;
        Ok(id)
    }

    /// Submits a batch of processes, all or nothing.
    ///
    /// Only the ID, arrival, and burst of each input are used; runtime
    /// state starts fresh.
    pub fn submit_all<I>(&mut self, processes: I) -> Result<()>
    where
        I: IntoIterator<Item = Process>,
    {
        if self.current_time > 0 {
            log::warn!("submission rejected at t={}: simulation started", self.current_time);
            return Err(SchedulerError::SimulationStarted);
        }

        let batch: Vec<Process> = processes
            .into_iter()
            .map(|p| Process::new(p.id(), p.arrival_time(), p.burst_time()))
            .collect();

        if let Err(errors) = validate_submissions(&self.processes, &batch) {
            for e in &errors {
                log::warn!("submission rejected: {e}");
            }
            return Err(SchedulerError::Validation(errors));
        }

        for p in &batch {
            log::debug!(
                "submitted P{}: arrival={}, burst={}",
                p.id(),
                p.arrival_time(),
                p.burst_time()
            );
        }
        self.processes.extend(batch);
        Ok(())
    }

    /// Advances the simulation by one tick.
    ///
    /// After termination this is a no-op that reports `all_completed` with
    /// no event. With no processes submitted the simulation counts as
    /// terminated.
    pub fn tick(&mut self) -> Result<TickReport> {
        if self.is_terminated() {
            return Ok(TickReport {
                event: None,
                all_completed: true,
            });
        }

        let now = self.current_time;
        let ready = self.ready_indices();
        log::trace!(
            "t={now} ready={:?}",
            ready.iter().map(|&i| self.processes[i].id()).collect::<Vec<_>>()
        );

        let event = match self.select(&ready) {
            Some(selected) => {
                self.run_selected(selected, &ready, now)?;
                TickEvent::running(now, self.processes[selected].id())
            }
            None => {
                log::debug!("t={now} idle");
                TickEvent::idle(now)
            }
        };

        self.trace.push(event);
        self.current_time += 1;

        let all_completed = self.is_terminated();
        if all_completed {
            log::info!(
                "all {} processes completed at t={}",
                self.processes.len(),
                self.current_time
            );
        }

        Ok(TickReport {
            event: Some(event),
            all_completed,
        })
    }

    /// Ticks until every process completes. Returns the ticks executed.
    pub fn run_to_completion(&mut self) -> Result<Ticks> {
        let mut ticks = 0;
        loop {
            let report = self.tick()?;
            if report.event.is_some() {
                ticks += 1;
            }
            if report.all_completed {
                return Ok(ticks);
            }
        }
    }

    /// Computes performance metrics.
    ///
    /// # Errors
    /// - [`SchedulerError::NoProcesses`] if nothing was submitted
    /// - [`SchedulerError::NotTerminated`] in strict mode while processes
    ///   are pending
    /// - [`SchedulerError::NoCompletedProcesses`] in partial mode before
    ///   the first completion
    pub fn metrics(&self) -> Result<SimulationMetrics> {
        if self.processes.is_empty() {
            return Err(SchedulerError::NoProcesses);
        }
        if self.config.strict_metrics {
            let pending = self.pending_count();
            if pending > 0 {
                return Err(SchedulerError::NotTerminated { pending });
            }
        }
        SimulationMetrics::calculate(&self.processes, &self.trace)
    }

    /// Discards all processes and the trace, and rewinds the clock to 0.
    ///
    /// Configuration is kept.
    pub fn reset(&mut self) {
        log::debug!("reset at t={}", self.current_time);
        self.processes.clear();
        self.trace.clear();
        self.current_time = 0;
    }

    pub fn current_time(&self) -> Ticks {
        self.current_time
    }

    /// Processes in submission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Events recorded since the last reset.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Whether every submitted process has completed.
    pub fn is_terminated(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    /// Number of processes not yet completed.
    pub fn pending_count(&self) -> usize {
        self.processes.iter().filter(|p| !p.is_completed()).count()
    }

    fn next_free_id(&self) -> Option<ProcessId> {
        let free = |id: ProcessId| self.process(id).is_none();
        let after_count = ProcessId::try_from(self.processes.len())
            .ok()
            .and_then(|n| n.checked_add(1));
        let after_max = self
            .processes
            .iter()
            .map(Process::id)
            .max()
            .and_then(|max| max.checked_add(1));

        after_count
            .into_iter()
            .chain(after_max)
            .find(|&id| free(id))
            .or_else(|| (1..=ProcessId::MAX).find(|&id| free(id)))
    }

    fn ready_indices(&self) -> Vec<usize> {
        let now = self.current_time;
        self.processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready_at(now))
            .map(|(i, _)| i)
            .collect()
    }

    fn select(&self, ready: &[usize]) -> Option<usize> {
        ready.iter().copied().min_by(|&a, &b| {
            let (pa, pb) = (&self.processes[a], &self.processes[b]);
            pa.remaining_time()
                .cmp(&pb.remaining_time())
                .then_with(|| self.config.tie_break.compare((a, pa), (b, pb)))
        })
    }

    fn run_selected(&mut self, selected: usize, ready: &[usize], now: Ticks) -> Result<()> {
        let process = &mut self.processes[selected];
        // Execute first so a fault leaves the tick unapplied.
        process.execute()?;
        process.mark_started(now);
        log::debug!("t={now} run P{} (remaining {})", process.id(), process.remaining_time());

        if process.is_completed() {
            process.set_completion_time(now + 1);
            log::info!("P{} completed at t={}", process.id(), now + 1);
        }

        for &i in ready.iter().filter(|&&i| i != selected) {
            self.processes[i].add_waiting_tick();
        }
        Ok(())
    }
}
