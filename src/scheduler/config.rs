//! Scheduler configuration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// How ties on remaining time are broken.
///
/// Every variant is a total order over distinct process IDs, so selection
/// is deterministic for a given submission sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lowest process ID wins.
    #[default]
    LowestId,
    /// Earliest arrival wins, then lowest ID.
    EarliestArrival,
    /// Earliest submitted wins.
    SubmissionOrder,
}

impl TieBreak {
    /// Orders two candidates with equal remaining time.
    ///
    /// `a_index`/`b_index` are submission positions, used by `SubmissionOrder`.
    pub(crate) fn compare(
        &self,
        (a_index, a): (usize, &Process),
        (b_index, b): (usize, &Process),
    ) -> Ordering {
        match self {
            Self::LowestId => a.id().cmp(&b.id()),
            Self::EarliestArrival => a
                .arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| a.id().cmp(&b.id())),
            Self::SubmissionOrder => a_index.cmp(&b_index),
        }
    }
}

/// Scheduler behavior settings.
///
/// Deserializes from partial documents; missing fields take defaults.
///
/// ```
/// use u_srt::scheduler::{SchedulerConfig, TieBreak};
///
/// let config = SchedulerConfig::default()
///     .with_tie_break(TieBreak::EarliestArrival)
///     .with_strict_metrics(false);
/// assert!(!config.strict_metrics);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Rule for equal remaining times.
    pub tie_break: TieBreak,
    /// When true, metrics before termination are an error. When false,
    /// metrics cover completed processes only.
    pub strict_metrics: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::LowestId,
            strict_metrics: true,
        }
    }
}

impl SchedulerConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_strict_metrics(mut self, strict: bool) -> Self {
        self.strict_metrics = strict;
        self
    }
}
