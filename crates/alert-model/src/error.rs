//! Classification Error Types

use thiserror::Error;

/// Errors during alert classification
///
/// Both variants carry the exact text that failed to resolve; extending the
/// vocabulary tables is the only valid fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// No severity keyword matched the alert text
    #[error("No severity keyword matched alert text: {0}")]
    UnknownSeverityLevel(String),

    /// A keyword matched, but the remaining hazard name is not in the vocabulary
    #[error("Unknown hazard name: {0}")]
    UnknownHazardName(String),
}
