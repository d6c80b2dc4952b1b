//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::outbound::persistence::JsonFileUserStore;

/// Everything [`super::create_server`] needs: where to listen and which
/// store to serve.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: JsonFileUserStore,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Listen on `bind_addr` and serve `store` with the system clock.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: JsonFileUserStore) -> Self {
        Self {
            bind_addr,
            store,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replace the wall clock used for timestamps and server info.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Store served by the API.
    pub fn store(&self) -> &JsonFileUserStore {
        &self.store
    }
}
