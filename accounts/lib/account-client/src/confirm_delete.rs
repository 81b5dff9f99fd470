use accounts_shared::client::confirm_delete::TOKEN_QUERY_PARAM;
use anyhow::anyhow;
use thiserror::Error;
use url::Url;

use crate::{
    errors::HttpLikeError,
    interface::Io,
    safe_interface::{message_of_rejected_body, IoSafe, SafeIo},
};

/// The token of a deletion link.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionToken(String);

impl DeletionToken {
    /// Wraps the token, `None` if it is empty.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        (!token.is_empty()).then_some(Self(token))
    }

    /// Reads the `token` parameter of an url query string
    /// (without the leading `?`).
    /// If the parameter occurs multiple times, the first one counts.
    pub fn from_query(query: &str) -> Option<Self> {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == TOKEN_QUERY_PARAM)
            .and_then(|(_, token)| Self::new(token.into_owned()))
    }

    /// Reads the `token` parameter of the given url.
    pub fn from_url(url: &Url) -> Option<Self> {
        url.query().and_then(Self::from_query)
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The result of a [`confirm_delete`] request.
#[derive(Error, Debug)]
pub enum ConfirmDeleteError {
    /// There was no token to send.
    #[error("The deletion token is missing.")]
    MissingToken,
    /// The account api answered with a non-success status.
    #[error("The account api rejected the deletion with status {status}")]
    CollaboratorRejected {
        /// The http status code.
        status: u16,
        /// The message the account api sent along, if any.
        message: Option<String>,
    },
    /// The account api could not be reached or
    /// answered with something unreadable.
    #[error("{0}")]
    TransportFailure(HttpLikeError),
}

impl From<HttpLikeError> for ConfirmDeleteError {
    fn from(value: HttpLikeError) -> Self {
        match value {
            // a body that is not a message did not come from the account api
            HttpLikeError::Status(status, body) => match message_of_rejected_body(body) {
                Ok(message) => Self::CollaboratorRejected { status, message },
                Err(err) => Self::TransportFailure(HttpLikeError::Other(anyhow!(
                    "status code {status} with unreadable body: {err}"
                ))),
            },
            err => Self::TransportFailure(err),
        }
    }
}

/// Confirm the deletion of an account on the account api.
/// Sends exactly one request, there are no retries.
///
/// On success the message of the account api is returned, if it sent one.
pub async fn confirm_delete(
    token: Option<&DeletionToken>,
    io: &dyn Io,
) -> anyhow::Result<Option<String>, ConfirmDeleteError> {
    confirm_delete_impl(token, io.into()).await
}

async fn confirm_delete_impl(
    token: Option<&DeletionToken>,
    io: IoSafe<'_>,
) -> anyhow::Result<Option<String>, ConfirmDeleteError> {
    let token = token.ok_or(ConfirmDeleteError::MissingToken)?;

    let res = io.request_confirm_delete(token).await?;

    Ok(res.into_message())
}
