use crate::deletion_flow::{FlowState, Status};

/// Title while waiting for the user.
pub const TITLE_CONFIRM: &str = "Confirm Account Deletion";
/// Title while the request is in flight.
pub const TITLE_PROCESSING: &str = "Processing Request";
/// Title after a failure.
pub const TITLE_FAILED: &str = "Action Failed";
/// Title after success or cancellation.
pub const TITLE_COMPLETE: &str = "Action Complete";

/// The controls a page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// The "delete my account" control.
    pub confirm_enabled: bool,
    /// The "cancel" control.
    pub cancel_enabled: bool,
}

/// How a finished flow ended, e.g. to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing went wrong.
    Success,
    /// Something went wrong.
    Failure,
}

/// What a deletion confirmation page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Confirm and cancel are offered.
    Confirm {
        /// The heading.
        title: &'static str,
        /// The question to the user.
        message: String,
        /// Both enabled.
        controls: Controls,
    },
    /// A busy indicator, nothing to click.
    Busy {
        /// The heading.
        title: &'static str,
        /// The message to the user.
        message: String,
    },
    /// The flow is over, only the message is left.
    Done {
        /// The heading.
        title: &'static str,
        /// The final message.
        message: String,
        /// How it ended.
        outcome: Outcome,
    },
}

impl View {
    /// The view for the given status.
    pub fn render(status: &Status) -> Self {
        let message = status.message.clone();
        match status.state {
            FlowState::AwaitingConfirmation => Self::Confirm {
                title: TITLE_CONFIRM,
                message,
                controls: Controls {
                    confirm_enabled: true,
                    cancel_enabled: true,
                },
            },
            FlowState::Processing => Self::Busy {
                title: TITLE_PROCESSING,
                message,
            },
            FlowState::Succeeded | FlowState::Cancelled => Self::Done {
                title: TITLE_COMPLETE,
                message,
                outcome: Outcome::Success,
            },
            FlowState::Failed | FlowState::InvalidToken => Self::Done {
                title: TITLE_FAILED,
                message,
                outcome: Outcome::Failure,
            },
        }
    }

    /// The heading of the page.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Confirm { title, .. } | Self::Busy { title, .. } | Self::Done { title, .. } => {
                *title
            }
        }
    }

    /// The message of the page.
    pub fn message(&self) -> &str {
        match self {
            Self::Confirm { message, .. }
            | Self::Busy { message, .. }
            | Self::Done { message, .. } => message,
        }
    }

    /// The controls, if the page offers any.
    pub const fn controls(&self) -> Option<Controls> {
        match self {
            Self::Confirm { controls, .. } => Some(*controls),
            Self::Busy { .. } | Self::Done { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::deletion_flow::{FlowState, Status};

    use super::{Outcome, View, TITLE_COMPLETE, TITLE_FAILED, TITLE_PROCESSING};

    fn status(state: FlowState) -> Status {
        Status {
            state,
            message: "msg".into(),
        }
    }

    #[test]
    fn only_awaiting_has_controls() {
        for state in [
            FlowState::Processing,
            FlowState::Succeeded,
            FlowState::Failed,
            FlowState::Cancelled,
            FlowState::InvalidToken,
        ] {
            let view = View::render(&status(state));
            assert!(view.controls().is_none(), "{state:?}");
            assert_eq!(view.message(), "msg");
        }
        assert!(View::render(&status(FlowState::AwaitingConfirmation))
            .controls()
            .is_some());
    }

    #[test]
    fn terminal_outcomes() {
        let view = View::render(&status(FlowState::Processing));
        assert_eq!(view.title(), TITLE_PROCESSING);

        let view = View::render(&status(FlowState::Cancelled));
        assert_eq!(view.title(), TITLE_COMPLETE);
        assert!(matches!(view, View::Done { outcome: Outcome::Success, .. }));

        let view = View::render(&status(FlowState::InvalidToken));
        assert_eq!(view.title(), TITLE_FAILED);
        assert!(matches!(view, View::Done { outcome: Outcome::Failure, .. }));
        assert!(FlowState::InvalidToken.is_terminal());
        assert!(!FlowState::Processing.is_terminal());
    }
}
