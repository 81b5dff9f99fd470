use std::{fmt::Debug, time::Duration};

use account_client::errors::HttpLikeError;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use url::Url;

/// The http requests the account api needs.
/// Every non-success status must be reported as [`HttpLikeError::Status`].
#[async_trait]
pub trait Http: Debug + Sync + Send {
    /// A `GET` request, returns the response body.
    async fn get(&self, url: Url) -> anyhow::Result<Vec<u8>, HttpLikeError>;
    /// A `POST` request with a json body, returns the response body.
    async fn post_json(&self, url: Url, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError>;
}

/// [`Http`] using a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpReqwest {
    client: reqwest::Client,
}

impl HttpReqwest {
    /// A client where every request, including reading
    /// the body, must finish within `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::ClientBuilder::new().timeout(timeout).build()?,
        })
    }

    fn map_err(err: reqwest::Error) -> HttpLikeError {
        if err.is_timeout() {
            HttpLikeError::Timeout
        } else if err.is_connect() || err.is_request() {
            HttpLikeError::Request
        } else {
            HttpLikeError::Other(err.into())
        }
    }

    async fn read_response(res: reqwest::Response) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let status = res.status();
        let body = res.bytes().await.map_err(Self::map_err)?.to_vec();
        if status.is_success() {
            Ok(body)
        } else {
            Err(HttpLikeError::Status(status.as_u16(), body))
        }
    }
}

#[async_trait]
impl Http for HttpReqwest {
    async fn get(&self, url: Url) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let res = self.client.get(url).send().await.map_err(Self::map_err)?;
        Self::read_response(res).await
    }

    async fn post_json(&self, url: Url, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(data)
            .send()
            .await
            .map_err(Self::map_err)?;
        Self::read_response(res).await
    }
}
