pub const SUCCESS_STATUSES: [&str; 3] = ["COMPLETED", "FINISHED", "SUCCESS"];
pub const FAILURE_STATUSES: [&str; 3] = ["FAILED", "ERROR", "CANCELLED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatusPhase {
    Pending,
    Succeeded,
    Failed,
}

impl JobStatusPhase {
    /// Classifies a provider status, compared upper-cased. Anything outside the
    /// terminal vocabulary (`IN_QUEUE`, `IN_PROGRESS`, unknown values) is pending.
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return Self::Pending;
        };

        let normalized = status.trim().to_uppercase();
        if SUCCESS_STATUSES.contains(&normalized.as_str()) {
            return Self::Succeeded;
        }
        if FAILURE_STATUSES.contains(&normalized.as_str()) {
            return Self::Failed;
        }

        Self::Pending
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
