use std::{sync::Arc, time::Duration};

use account_client::{errors::HttpLikeError, interface::Io};
use accounts_shared::client::{
    confirm_delete::{CONFIRM_DELETE_PATH, TOKEN_QUERY_PARAM},
    password_reset::PASSWORD_RESET_PATH,
};
use url::Url;

use crate::http::{Http, HttpReqwest};

/// The base urls of the account api.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountApiUrls {
    /// Base of the confirm-delete endpoint.
    pub confirm_delete: Url,
    /// Base of the password reset endpoint.
    pub password_reset: Url,
}

impl AccountApiUrls {
    /// Both endpoints under the same base url.
    pub fn new(base_url: Url) -> Self {
        Self::with_password_reset(base_url.clone(), base_url)
    }

    /// Different base urls per endpoint.
    pub fn with_password_reset(confirm_delete: Url, password_reset: Url) -> Self {
        Self {
            confirm_delete: Self::as_dir(confirm_delete),
            password_reset: Self::as_dir(password_reset),
        }
    }

    /// Makes sure relative joins keep the last path segment,
    /// `http://host/api` becomes `http://host/api/`.
    fn as_dir(mut url: Url) -> Url {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    /// The full url of the confirm-delete request for the given token.
    pub fn confirm_delete_url(&self, token: &str) -> anyhow::Result<Url, HttpLikeError> {
        let mut url = self.confirm_delete.join(CONFIRM_DELETE_PATH)?;
        url.query_pairs_mut().append_pair(TOKEN_QUERY_PARAM, token);
        Ok(url)
    }

    /// The full url of the password reset request.
    pub fn password_reset_url(&self) -> anyhow::Result<Url, HttpLikeError> {
        Ok(self.password_reset.join(PASSWORD_RESET_PATH)?)
    }
}

/// Talks to the account api over http.
#[derive(Debug)]
pub struct ClientReqwest {
    /// The http layer requests go through.
    pub http: Arc<dyn Http>,
    /// Where the requests go to.
    pub urls: AccountApiUrls,
}

impl ClientReqwest {
    /// A client for the given account api, where every request
    /// must finish within `timeout`.
    pub fn new(urls: AccountApiUrls, timeout: Duration) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            http: Arc::new(HttpReqwest::new(timeout)?),
            urls,
        }))
    }
}

#[async_trait::async_trait]
impl Io for ClientReqwest {
    async fn request_confirm_delete(&self, token: &str) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let url = self.urls.confirm_delete_url(token)?;
        log::debug!(target: "account_api", "GET {}", self.urls.confirm_delete);
        self.http.get(url).await
    }
    async fn send_password_reset(&self, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        let url = self.urls.password_reset_url()?;
        log::debug!(target: "account_api", "POST {url}");
        self.http.post_json(url, data).await
    }
}
