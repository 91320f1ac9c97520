use crate::runpod::enums::job_status_phase::JobStatusPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Submitted,
    /// `polls` counts status responses received so far.
    Polling { polls: u32 },
    Succeeded,
    Failed,
    TimedOut,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollEvent {
    Status(JobStatusPhase),
    DeadlinePassed,
    Cancelled,
}

impl PollState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Submitted | Self::Polling { .. })
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Submitted => "submitted",
            Self::Polling { .. } => "polling",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Terminal states absorb every event.
pub fn transition(state: PollState, event: PollEvent) -> PollState {
    if state.is_terminal() {
        return state;
    }

    match event {
        PollEvent::Status(JobStatusPhase::Succeeded) => PollState::Succeeded,
        PollEvent::Status(JobStatusPhase::Failed) => PollState::Failed,
        PollEvent::Status(JobStatusPhase::Pending) => match state {
            PollState::Polling { polls } => PollState::Polling { polls: polls + 1 },
            _ => PollState::Polling { polls: 0 },
        },
        PollEvent::DeadlinePassed => PollState::TimedOut,
        PollEvent::Cancelled => PollState::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_responses_count_polls() {
        let state = transition(PollState::Submitted, PollEvent::Status(JobStatusPhase::Pending));
        assert_eq!(state, PollState::Polling { polls: 0 });

        let state = transition(state, PollEvent::Status(JobStatusPhase::Pending));
        assert_eq!(state, PollState::Polling { polls: 1 });
    }

    #[test]
    fn submission_can_finish_immediately() {
        assert_eq!(
            transition(PollState::Submitted, PollEvent::Status(JobStatusPhase::Succeeded)),
            PollState::Succeeded
        );
        assert_eq!(
            transition(PollState::Submitted, PollEvent::Status(JobStatusPhase::Failed)),
            PollState::Failed
        );
    }

    #[test]
    fn terminal_states_absorb_events() {
        for state in [
            PollState::Succeeded,
            PollState::Failed,
            PollState::TimedOut,
            PollState::Cancelled,
        ] {
            assert_eq!(transition(state, PollEvent::Status(JobStatusPhase::Pending)), state);
            assert_eq!(transition(state, PollEvent::DeadlinePassed), state);
            assert_eq!(transition(state, PollEvent::Cancelled), state);
        }
    }

    #[test]
    fn deadline_and_cancel_end_polling() {
        let polling = PollState::Polling { polls: 3 };

        assert_eq!(transition(polling, PollEvent::DeadlinePassed), PollState::TimedOut);
        assert_eq!(transition(polling, PollEvent::Cancelled), PollState::Cancelled);
    }
}
