use serde::{Deserialize, Serialize};

/// Path of the password reset endpoint, relative to the
/// base url of the account api.
pub const PASSWORD_RESET_PATH: &str = "users/reset-password";

/// The minimum amount of characters a new password must have.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Represents the data required for a password reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    /// The reset token the user received by email.
    pub token: String,
    /// The password that replaces the old one.
    pub new_password: String,
}

/// Whether the password is long enough to be accepted.
/// Counts characters, not bytes.
pub fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
