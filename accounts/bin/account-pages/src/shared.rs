use std::sync::Arc;

use account_client::interface::Io;

use crate::pages::Pages;

/// Shared data across the implementation
pub struct Shared {
    /// Talks to the account api.
    pub io: Arc<dyn Io>,
    pub pages: Pages,
}
