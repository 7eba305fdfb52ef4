use serde::Serialize;

/// How a user-triggered operation ended.
///
/// Failures never propagate out of the view model; they are reported here
/// and surfaced as the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationOutcome {
    /// Completed; a success status was posted
    Succeeded,
    /// Rejected locally or by a collaborator; an error status was posted
    Failed,
    /// The same operation is already in flight; nothing happened
    Busy,
    /// Preconditions not met; nothing happened
    Skipped,
}

impl OperationOutcome {
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }
}
