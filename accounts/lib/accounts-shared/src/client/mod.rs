/// Data types and constants related to confirming
/// an account deletion.
pub mod confirm_delete;
/// Data types and rules related to resetting
/// a password with a reset token.
pub mod password_reset;
