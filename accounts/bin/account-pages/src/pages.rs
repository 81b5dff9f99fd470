use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use account_client::deletion_flow::DeleteConfirmation;
use base64::Engine;
use parking_lot::Mutex;
use rand::RngCore;

#[derive(Debug)]
struct Page {
    flow: Arc<DeleteConfirmation>,
    opened: Instant,
}

/// The deletion confirmation pages that are currently open.
/// A page is forgotten once its lifetime is over.
#[derive(Debug)]
pub struct Pages {
    pages: Arc<Mutex<HashMap<String, Page>>>,
    lifetime: Duration,
}

impl Pages {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            pages: Default::default(),
            lifetime,
        }
    }

    fn gen_id() -> String {
        let mut id = [0u8; 16];
        rand::rngs::OsRng.fill_bytes(&mut id);
        base64::prelude::BASE64_URL_SAFE_NO_PAD.encode(id)
    }

    /// Registers a new page, returns its id.
    /// The page is removed again after its lifetime.
    pub fn open(&self, flow: DeleteConfirmation) -> (String, Arc<DeleteConfirmation>) {
        let flow = Arc::new(flow);
        let id = Self::gen_id();

        self.pages.lock().insert(
            id.clone(),
            Page {
                flow: flow.clone(),
                opened: Instant::now(),
            },
        );

        let pages = self.pages.clone();
        let lifetime = self.lifetime;
        let expired_id = id.clone();
        // remove page after some time
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            pages.lock().remove(&expired_id);
        });

        (id, flow)
    }

    /// The page with the given id, if it is still open.
    pub fn get(&self, id: &str) -> Option<Arc<DeleteConfirmation>> {
        let pages = self.pages.lock();
        pages
            .get(id)
            .filter(|page| page.opened.elapsed() < self.lifetime)
            .map(|page| page.flow.clone())
    }

    /// Amount of pages that are currently registered.
    pub fn count(&self) -> usize {
        self.pages.lock().len()
    }
}

#[cfg(test)]
mod test {
    use std::{sync::Arc, time::Duration};

    use account_client::deletion_flow::DeleteConfirmation;

    use super::Pages;

    #[tokio::test]
    async fn open_and_get() {
        let pages = Pages::new(Duration::from_secs(60));
        let (id, flow) = pages.open(DeleteConfirmation::from_query(Some("token=abc")));
        let (id2, _) = pages.open(DeleteConfirmation::from_query(Some("token=abc")));
        assert_ne!(id, id2);
        assert_eq!(id.len(), 22);
        assert!(Arc::ptr_eq(&pages.get(&id).unwrap(), &flow));
        assert!(pages.get("unknown").is_none());
        assert_eq!(pages.count(), 2);
    }

    #[tokio::test]
    async fn pages_expire() {
        let pages = Pages::new(Duration::ZERO);
        let (id, _) = pages.open(DeleteConfirmation::from_query(Some("token=abc")));
        assert!(pages.get(&id).is_none());
    }

    #[tokio::test]
    async fn expired_pages_are_removed() {
        let pages = Pages::new(Duration::from_millis(50));
        for _ in 0..3 {
            pages.open(DeleteConfirmation::from_query(Some("token=abc")));
        }
        assert_eq!(pages.count(), 3);

        // without any further page being opened
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(pages.count(), 0);
    }
}
