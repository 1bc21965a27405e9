//! Submission validation.
//!
//! Checks process definitions before they enter the scheduler. Detects:
//! - Duplicate IDs (within a batch and against already-submitted processes)
//! - Zero burst times
//!
//! Validation never mutates anything, which is what lets the scheduler
//! accept or reject a whole batch atomically.

use std::collections::HashSet;

use crate::models::{Process, ProcessId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// Process runtime fields contradict each other.
    InconsistentState,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates candidate processes against those already submitted.
///
/// Checks:
/// 1. Every burst time is at least 1
/// 2. No candidate ID collides with an existing process
/// 3. No two candidates share an ID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_submissions(existing: &[Process], candidates: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids: HashSet<ProcessId> = existing.iter().map(Process::id).collect();

    for p in candidates {
        if p.burst_time() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id()),
            ));
        }

        if !ids.insert(p.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        let existing = vec![Process::new(1, 0, 3)];
        let batch = vec![Process::new(2, 1, 2), Process::new(3, 4, 1)];
        assert!(validate_submissions(&existing, &batch).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_submissions(&[], &[Process::new(1, 0, 0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
    }

    #[test]
    fn test_duplicate_against_existing() {
        let existing = vec![Process::new(1, 0, 3)];
        let errors = validate_submissions(&existing, &[Process::new(1, 2, 2)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_duplicate_within_batch() {
        let batch = vec![Process::new(5, 0, 1), Process::new(5, 1, 1)];
        let errors = validate_submissions(&[], &batch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_multiple_errors() {
        // Zero burst + duplicate on the same candidate
        let existing = vec![Process::new(1, 0, 1)];
        let errors = validate_submissions(&existing, &[Process::new(1, 0, 0)]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_submissions(&[Process::new(1, 0, 1)], &[]).is_ok());
    }
}
