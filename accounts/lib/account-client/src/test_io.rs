use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{errors::HttpLikeError, interface::Io};

type Response = anyhow::Result<Vec<u8>, HttpLikeError>;

/// An [`Io`] that answers every request with a prepared response
/// and counts how often it was called.
/// The response is handed out once, later calls see [`HttpLikeError::Request`].
pub struct TestIo {
    response: Mutex<Option<Response>>,
    /// how often the request future returns pending before it resolves
    pending_polls: usize,
    confirm_delete_calls: AtomicUsize,
    password_reset_calls: AtomicUsize,
    last_token: Mutex<Option<String>>,
    last_password_reset: Mutex<Option<Vec<u8>>>,
}

impl TestIo {
    pub fn respond(response: Response) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            pending_polls: 0,
            confirm_delete_calls: Default::default(),
            password_reset_calls: Default::default(),
            last_token: Default::default(),
            last_password_reset: Default::default(),
        }
    }

    pub fn respond_delayed(response: Response, pending_polls: usize) -> Self {
        Self {
            pending_polls,
            ..Self::respond(response)
        }
    }

    pub fn confirm_delete_calls(&self) -> usize {
        self.confirm_delete_calls.load(Ordering::SeqCst)
    }

    pub fn password_reset_calls(&self) -> usize {
        self.password_reset_calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().clone()
    }

    pub fn last_password_reset(&self) -> Option<serde_json::Value> {
        self.last_password_reset
            .lock()
            .as_ref()
            .and_then(|data| serde_json::from_slice(data).ok())
    }

    async fn answer(&self) -> Response {
        for _ in 0..self.pending_polls {
            tokio::task::yield_now().await;
        }
        self.response
            .lock()
            .take()
            .unwrap_or(Err(HttpLikeError::Request))
    }
}

#[async_trait]
impl Io for TestIo {
    async fn request_confirm_delete(&self, token: &str) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        self.confirm_delete_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock() = Some(token.to_string());
        self.answer().await
    }
    async fn send_password_reset(&self, data: Vec<u8>) -> anyhow::Result<Vec<u8>, HttpLikeError> {
        self.password_reset_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_password_reset.lock() = Some(data);
        self.answer().await
    }
}
