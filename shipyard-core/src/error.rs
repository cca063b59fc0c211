//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Store index outside `0..len`
    #[error("Record index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The action needs a selected record but none is selected
    #[error("No ship selected")]
    NoSelection,

    /// The action is disabled in the current form state
    #[error("Action '{action}' is not available while {state}")]
    ActionNotAllowed {
        action: &'static str,
        state: &'static str,
    },

    /// Submitted field text failed validation (all messages collected)
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl CoreError {
    /// Whether it is expected behavior (user input, disabled action, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NoSelection | Self::ActionNotAllowed { .. } | Self::Validation(_) => true,
            Self::IndexOutOfRange { .. } => false,
        }
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
