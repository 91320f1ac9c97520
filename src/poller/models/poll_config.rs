use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2_000);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(240_000);

#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    /// Measured from submission.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}
