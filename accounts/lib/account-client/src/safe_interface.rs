use accounts_shared::{
    account_server::message::MessageResponse, client::password_reset::PasswordResetRequest,
};
use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;

use crate::{confirm_delete::DeletionToken, errors::HttpLikeError, interface::Io};

/// Type safe version of [`Io`]
#[async_trait]
pub trait SafeIo: Sync + Send {
    async fn request_confirm_delete(
        &self,
        token: &DeletionToken,
    ) -> anyhow::Result<MessageResponse, HttpLikeError>;
    async fn send_password_reset(
        &self,
        data: PasswordResetRequest,
    ) -> anyhow::Result<(), HttpLikeError>;
}

pub struct IoSafe<'a> {
    pub io: &'a dyn Io,
}

impl<'a> IoSafe<'a> {
    fn des_from_vec<T>(data: Vec<u8>) -> anyhow::Result<T, HttpLikeError>
    where
        for<'de> T: Deserialize<'de>,
    {
        let s = String::from_utf8(data).map_err(|err| HttpLikeError::Other(err.into()))?;
        serde_json::from_str(s.as_str())
            .map_err(|_| HttpLikeError::Other(anyhow!("failed to parse json: {s}")))
    }

    /// A success body may be empty, which is the same as no message.
    fn message_from_vec(data: Vec<u8>) -> anyhow::Result<MessageResponse, HttpLikeError> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(MessageResponse::default());
        }
        Self::des_from_vec(data)
    }
}

impl<'a> From<&'a dyn Io> for IoSafe<'a> {
    fn from(io: &'a dyn Io) -> Self {
        Self { io }
    }
}

#[async_trait]
impl<'a> SafeIo for IoSafe<'a> {
    async fn request_confirm_delete(
        &self,
        token: &DeletionToken,
    ) -> anyhow::Result<MessageResponse, HttpLikeError> {
        let res = self.io.request_confirm_delete(token.as_str()).await?;
        Self::message_from_vec(res)
    }
    async fn send_password_reset(
        &self,
        data: PasswordResetRequest,
    ) -> anyhow::Result<(), HttpLikeError> {
        // the body of a successful reset carries nothing of interest
        self.io
            .send_password_reset(serde_json::to_string(&data)?.into_bytes())
            .await
            .map(|_| ())
    }
}

/// Reads the message of a rejected request's body.
/// An empty body is no message, anything else must be a json message.
pub fn message_of_rejected_body(body: Vec<u8>) -> anyhow::Result<Option<String>, HttpLikeError> {
    IoSafe::message_from_vec(body).map(MessageResponse::into_message)
}

/// Reads the message of a failed request's body leniently.
/// Anything that is not a json message counts as no message.
pub fn message_of_failed_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<MessageResponse>(body)
        .ok()
        .and_then(MessageResponse::into_message)
}
