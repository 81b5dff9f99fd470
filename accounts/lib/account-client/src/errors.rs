use thiserror::Error;

/// An error that is similar to
/// common http errors.
/// Used for requests to the account api.
#[derive(Error, Debug)]
pub enum HttpLikeError {
    /// The request could not be sent or no response
    /// arrived, e.g. the account api is unreachable.
    #[error("Could not send request or no response was received.")]
    Request,
    /// The account api did not answer in time.
    #[error("The request timed out.")]
    Timeout,
    /// The account api answered with a non-success status.
    /// The body is kept, it usually carries a message for the user.
    #[error("The request failed with status code {0}")]
    Status(u16, Vec<u8>),
    /// Everything else, e.g. a response that could not be parsed.
    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<serde_json::Error> for HttpLikeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Other(value.into())
    }
}

impl From<url::ParseError> for HttpLikeError {
    fn from(value: url::ParseError) -> Self {
        Self::Other(value.into())
    }
}
