//! Execution trace (Gantt sequence).
//!
//! One `TickEvent` per simulated tick, in tick order. Renderers consume
//! either the raw events or the collapsed `GanttSegment` spans.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// What the CPU did during one tick.
///
/// Serializes as `{"tick": 0, "event": "RUNNING", "processId": 1}` or
/// `{"tick": 4, "event": "IDLE"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    /// Clock value before the tick executed.
    pub tick: Ticks,
    #[serde(flatten)]
    pub kind: TickKind,
}

/// Tick outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TickKind {
    /// A process held the CPU.
    Running {
        #[serde(rename = "processId")]
        process_id: ProcessId,
    },
    /// No process was ready.
    Idle,
}

impl TickEvent {
    pub fn running(tick: Ticks, process_id: ProcessId) -> Self {
        Self {
            tick,
            kind: TickKind::Running { process_id },
        }
    }

    pub fn idle(tick: Ticks) -> Self {
        Self {
            tick,
            kind: TickKind::Idle,
        }
    }

    /// Running process, or `None` for idle ticks.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self.kind {
            TickKind::Running { process_id } => Some(process_id),
            TickKind::Idle => None,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.kind, TickKind::Idle)
    }
}

/// A maximal run of consecutive ticks with the same occupant.
///
/// Covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSegment {
    pub start: Ticks,
    pub end: Ticks,
    /// `None` = idle.
    pub process_id: Option<ProcessId>,
}

impl GanttSegment {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Ordered tick events accumulated since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TickEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: TickEvent) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.tick < event.tick),
            "trace events must be in tick order"
        );
        self.events.push(event);
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    /// All events in tick order.
    pub fn events(&self) -> &[TickEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TickEvent> {
        self.events.iter()
    }

    /// Number of ticks in which a process ran.
    pub fn busy_ticks(&self) -> u64 {
        self.events.iter().filter(|e| !e.is_idle()).count() as u64
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> u64 {
        self.events.iter().filter(|e| e.is_idle()).count() as u64
    }

    /// Times the CPU moved from one process to a different one.
    ///
    /// Idle gaps are skipped: `P1, IDLE, P1` is zero switches,
    /// `P1, IDLE, P2` is one.
    pub fn context_switches(&self) -> u64 {
        let mut switches = 0;
        let mut last: Option<ProcessId> = None;
        for pid in self.events.iter().filter_map(TickEvent::process_id) {
            if last.is_some_and(|prev| prev != pid) {
                switches += 1;
            }
            last = Some(pid);
        }
        switches
    }

    /// Collapses consecutive ticks with the same occupant into spans.
    pub fn segments(&self) -> Vec<GanttSegment> {
        let mut segments: Vec<GanttSegment> = Vec::new();
        for event in &self.events {
            let occupant = event.process_id();
            match segments.last_mut() {
                Some(seg) if seg.process_id == occupant && seg.end == event.tick => {
                    seg.end = event.tick + 1;
                }
                _ => segments.push(GanttSegment {
                    start: event.tick,
                    end: event.tick + 1,
                    process_id: occupant,
                }),
            }
        }
        segments
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TickEvent;
    type IntoIter = std::slice::Iter<'a, TickEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
