use parking_lot::Mutex;

use crate::{
    confirm_delete::{confirm_delete, ConfirmDeleteError, DeletionToken},
    interface::Io,
    view::View,
};

/// Shown when the link did not carry a token.
pub const MSG_INVALID_TOKEN: &str = "Invalid or missing token. Please ensure you are using the correct link provided in your email.";
/// Shown while waiting for the user to decide.
pub const MSG_AWAITING_CONFIRMATION: &str = "Are you absolutely sure you want to permanently delete your account? This action cannot be undone and all your data will be lost.";
/// Shown if confirm was requested without a token.
pub const MSG_MISSING_TOKEN_ON_CONFIRM: &str =
    "Invalid or missing token. Cannot proceed with deletion.";
/// Shown while the account api processes the deletion.
pub const MSG_PROCESSING: &str = "Processing your account deletion. Please wait...";
/// Shown on success, if the account api sent no message.
pub const MSG_SUCCEEDED: &str =
    "Your account has been successfully deleted. We're sad to see you go!";
/// Shown on rejection, if the account api sent no message.
pub const MSG_REJECTED: &str =
    "Failed to delete account. Please try again or contact support if the issue persists.";
/// Shown if the account api could not be reached or answered garbage.
pub const MSG_TRANSPORT_FAILURE: &str = "An unexpected error occurred while trying to delete your account. Please check your internet connection and try again.";
/// Shown after the user cancelled.
pub const MSG_CANCELLED: &str =
    "Account deletion cancelled. Your account remains active. You can safely close this page.";

/// The states of a deletion confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowState {
    /// Waiting for the user to confirm or cancel.
    AwaitingConfirmation,
    /// The request to the account api is in flight.
    Processing,
    /// The account was deleted.
    Succeeded,
    /// The deletion failed, for whatever reason.
    Failed,
    /// The user cancelled.
    Cancelled,
    /// The page was opened without a token.
    InvalidToken,
}

impl FlowState {
    /// No user action is possible in this state anymore.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Failed | Self::Cancelled | Self::InvalidToken
        )
    }
}

/// A [`FlowState`] together with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// The current state.
    pub state: FlowState,
    /// Text for display only.
    pub message: String,
}

impl Status {
    fn new(state: FlowState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }
}

/// Marks a confirm request in flight.
/// If it is dropped before it was resolved, e.g. because the future
/// of [`DeleteConfirmation::confirm`] was dropped, the page fails
/// instead of staying in [`FlowState::Processing`] forever.
struct InFlight<'a> {
    status: &'a Mutex<Status>,
    resolved: bool,
}

impl InFlight<'_> {
    fn resolve(mut self, next: Status) -> Status {
        self.resolved = true;
        let mut status = self.status.lock();
        *status = next;
        status.clone()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }
        let mut status = self.status.lock();
        if status.state == FlowState::Processing {
            log::error!(
                target: "deletion",
                "confirm request was abandoned before the account api answered"
            );
            *status = Status::new(FlowState::Failed, MSG_TRANSPORT_FAILURE);
        }
    }
}

/// The controller behind a deletion confirmation page.
///
/// One instance per opened page. The state guard inside makes sure
/// that at most one request reaches the account api, even if
/// [`DeleteConfirmation::confirm`] is invoked concurrently.
#[derive(Debug)]
pub struct DeleteConfirmation {
    token: Option<DeletionToken>,
    status: Mutex<Status>,
}

impl DeleteConfirmation {
    /// Creates the controller for a page load.
    /// Without a token the page is terminal right away.
    pub fn new(token: Option<DeletionToken>) -> Self {
        let status = if token.is_some() {
            Status::new(FlowState::AwaitingConfirmation, MSG_AWAITING_CONFIRMATION)
        } else {
            Status::new(FlowState::InvalidToken, MSG_INVALID_TOKEN)
        };
        Self {
            token,
            status: Mutex::new(status),
        }
    }

    /// Creates the controller from the query string of the page url.
    pub fn from_query(query: Option<&str>) -> Self {
        Self::new(query.and_then(DeletionToken::from_query))
    }

    /// A snapshot of the current status.
    pub fn status(&self) -> Status {
        self.status.lock().clone()
    }

    /// What the page should show right now.
    pub fn view(&self) -> View {
        View::render(&self.status())
    }

    /// The user confirmed the deletion.
    ///
    /// Only has an effect while awaiting confirmation, otherwise
    /// the current status is returned and nothing is sent.
    /// Resolves once the account api answered. If the returned future is
    /// dropped while the request is in flight, the page ends up failed.
    pub async fn confirm(&self, io: &dyn Io) -> Status {
        let in_flight = {
            let mut status = self.status.lock();
            if status.state != FlowState::AwaitingConfirmation {
                log::debug!(target: "deletion", "ignored confirm in state {:?}", status.state);
                return status.clone();
            }
            if self.token.is_none() {
                *status = Status::new(FlowState::Failed, MSG_MISSING_TOKEN_ON_CONFIRM);
                return status.clone();
            }
            *status = Status::new(FlowState::Processing, MSG_PROCESSING);
            InFlight {
                status: &self.status,
                resolved: false,
            }
        };

        let next = match confirm_delete(self.token.as_ref(), io).await {
            Ok(message) => Status::new(
                FlowState::Succeeded,
                message.unwrap_or_else(|| MSG_SUCCEEDED.to_string()),
            ),
            Err(ConfirmDeleteError::MissingToken) => {
                Status::new(FlowState::Failed, MSG_MISSING_TOKEN_ON_CONFIRM)
            }
            Err(ConfirmDeleteError::CollaboratorRejected { status, message }) => {
                log::warn!(
                    target: "deletion",
                    "account api rejected deletion with status {status}: {message:?}"
                );
                Status::new(
                    FlowState::Failed,
                    message.unwrap_or_else(|| MSG_REJECTED.to_string()),
                )
            }
            Err(ConfirmDeleteError::TransportFailure(err)) => {
                log::error!(target: "deletion", "error deleting account: {err}");
                Status::new(FlowState::Failed, MSG_TRANSPORT_FAILURE)
            }
        };

        in_flight.resolve(next)
    }

    /// The user cancelled the deletion.
    /// Only has an effect while awaiting confirmation.
    pub fn cancel(&self) -> Status {
        let mut status = self.status.lock();
        if status.state == FlowState::AwaitingConfirmation {
            *status = Status::new(FlowState::Cancelled, MSG_CANCELLED);
        } else {
            log::debug!(target: "deletion", "ignored cancel in state {:?}", status.state);
        }
        status.clone()
    }
}
