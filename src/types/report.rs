use std::fmt;

use thiserror::Error;

/// One field-level failure produced by the submission guard's validation
/// checkpoint. User-facing and recoverable: the form is re-rendered with
/// the message attached to the failing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// A submitted value is not among the field's currently-visible choices.
    #[error("field '{field_id}': please select a valid option")]
    InvalidSelection { field_id: String },

    /// A required field has zero visible choices given the other answers.
    #[error("field '{field_id}': no options available, adjust your previous selections")]
    NoOptionsAvailable { field_id: String },
}

impl ValidationFailure {
    /// The id of the field the failure is attached to.
    #[must_use]
    pub fn field_id(&self) -> &str {
        match self {
            ValidationFailure::InvalidSelection { field_id }
            | ValidationFailure::NoOptionsAvailable { field_id } => field_id,
        }
    }
}

/// Aggregated result of the validation checkpoint.
///
/// Failures accumulate across all fields; the scan never stops at the
/// first one, so a re-rendered form can mark every failing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// All failures, in field scan order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// The failure recorded for a given field, if any.
    #[must_use]
    pub fn failure_for(&self, field_id: &str) -> Option<&ValidationFailure> {
        self.failures.iter().find(|f| f.field_id() == field_id)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
