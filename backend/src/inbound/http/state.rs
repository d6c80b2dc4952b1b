//! Shared HTTP adapter state.
//!
//! Handlers receive this state through `actix_web::web::Data` and depend only
//! on domain ports, so they can be exercised without touching the disk.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::UserService;
use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read port.
    pub users: Arc<dyn UsersQuery>,
    /// Write port.
    pub commands: Arc<dyn UsersCommand>,
    /// Wall clock for server info.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the ports and clock.
    pub fn new(
        users: Arc<dyn UsersQuery>,
        commands: Arc<dyn UsersCommand>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            commands,
            clock,
        }
    }

    /// Serve both ports from one [`UserService`].
    pub fn from_service<S>(service: UserService<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: UserStore + 'static,
    {
        let service = Arc::new(service);
        Self::new(service.clone(), service, clock)
    }
}
