use async_trait::async_trait;

use crate::errors::HttpLikeError;

/// An io interface for the client to abstract away
/// the _actual_ communication used to communicate
/// with the account api.
///
/// Implementations must return [`HttpLikeError::Status`]
/// for every non-success status, together with the response body.
#[async_trait]
pub trait Io: Sync + Send {
    /// Asks the account api to delete the account the given
    /// deletion token belongs to.
    /// The token is passed as is, the implementation takes care
    /// of encoding it into the request.
    /// Receives the response body as arbitrary data.
    async fn request_confirm_delete(&self, token: &str) -> anyhow::Result<Vec<u8>, HttpLikeError>;
    /// Send to actually do a password reset with a given reset token. Where the request data and response data
    /// are arbitrary.
    async fn send_password_reset(&self, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError>;
}
