//! Error types for the simulator.

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors surfaced by scheduler operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    /// A submission was rejected. Carries every issue found.
    #[error("submission rejected: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Metrics requested with no processes submitted.
    #[error("no processes submitted")]
    NoProcesses,

    /// Strict metrics requested while processes are still pending.
    #[error("simulation not terminated: {pending} process(es) still pending")]
    NotTerminated { pending: usize },

    /// Partial metrics requested before any process completed.
    #[error("no process has completed yet")]
    NoCompletedProcesses,

    /// Submission attempted after the clock has advanced.
    #[error("simulation already started; submissions are closed")]
    SimulationStarted,

    /// Automatic ID assignment found no free `ProcessId`.
    #[error("no free process ID left")]
    IdSpaceExhausted,

    /// `execute()` called on a process with no remaining time.
    #[error("process {0} executed after completion")]
    AlreadyCompleted(ProcessId),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for SchedulerError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = SchedulerError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::ZeroBurst, "Process 2 has zero burst time"),
        ]);
        assert_eq!(
            err.to_string(),
            "submission rejected: Duplicate process ID: 1; Process 2 has zero burst time"
        );
    }

    #[test]
    fn test_state_error_display() {
        let err = SchedulerError::NotTerminated { pending: 2 };
        assert_eq!(
            err.to_string(),
            "simulation not terminated: 2 process(es) still pending"
        );
        assert_eq!(
            SchedulerError::AlreadyCompleted(7).to_string(),
            "process 7 executed after completion"
        );
    }
}
