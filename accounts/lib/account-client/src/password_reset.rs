use accounts_shared::client::password_reset::{password_long_enough, PasswordResetRequest};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    errors::HttpLikeError,
    interface::Io,
    safe_interface::{message_of_failed_body, IoSafe, SafeIo},
};

/// Shown after the password was reset.
pub const MSG_PASSWORD_RESET: &str = "Password reset successfully!";

/// The password reset form as typed by the user.
/// Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordResetForm {
    /// The reset token from the email.
    pub token: String,
    /// The new password.
    pub new_password: String,
    /// The new password, typed again.
    pub confirm_password: String,
}

impl PasswordResetForm {
    /// Checks the form before anything is sent.
    pub fn validate(&self) -> anyhow::Result<(), PasswordResetError> {
        if self.token.is_empty() || self.new_password.is_empty() || self.confirm_password.is_empty()
        {
            return Err(PasswordResetError::MissingFields);
        }
        if self.new_password != self.confirm_password {
            return Err(PasswordResetError::PasswordMismatch);
        }
        if !password_long_enough(&self.new_password) {
            return Err(PasswordResetError::PasswordTooShort);
        }
        Ok(())
    }
}

/// The result of a [`password_reset`] request.
#[derive(Error, Debug)]
pub enum PasswordResetError {
    /// Not all fields were filled.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// The two passwords differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The password is too short.
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    /// The account api answered with a non-success status.
    #[error("The account api rejected the password reset with status {status}")]
    Rejected {
        /// The http status code.
        status: u16,
        /// The message the account api sent along, if any.
        message: Option<String>,
    },
    /// A http like error occurred.
    #[error("{0}")]
    HttpLikeError(HttpLikeError),
}

impl From<HttpLikeError> for PasswordResetError {
    fn from(value: HttpLikeError) -> Self {
        match value {
            HttpLikeError::Status(status, body) => Self::Rejected {
                status,
                message: message_of_failed_body(&body),
            },
            err => Self::HttpLikeError(err),
        }
    }
}

impl PasswordResetError {
    /// The text that is shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields | Self::PasswordMismatch | Self::PasswordTooShort => {
                self.to_string()
            }
            Self::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Failed to reset password. Please try again.".to_string()),
            Self::HttpLikeError(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
        }
    }
}

/// Ask the account api to reset the password
/// to the given password given a reset token.
/// Nothing is sent if the form is invalid.
pub async fn password_reset(
    form: &PasswordResetForm,
    io: &dyn Io,
) -> anyhow::Result<(), PasswordResetError> {
    password_reset_impl(form, io.into()).await
}

async fn password_reset_impl(
    form: &PasswordResetForm,
    io: IoSafe<'_>,
) -> anyhow::Result<(), PasswordResetError> {
    form.validate()?;

    let res = io
        .send_password_reset(PasswordResetRequest {
            token: form.token.clone(),
            new_password: form.new_password.clone(),
        })
        .await;
    match res {
        Ok(()) => Ok(()),
        Err(err) => {
            let err = PasswordResetError::from(err);
            match &err {
                PasswordResetError::Rejected { status, message } => log::warn!(
                    target: "password_reset",
                    "account api rejected password reset with status {status}: {message:?}"
                ),
                err => log::error!(target: "password_reset", "error resetting password: {err}"),
            }
            Err(err)
        }
    }
}
