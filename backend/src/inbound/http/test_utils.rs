//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::UserService;
use crate::domain::ports::InMemoryUserStore;
use crate::inbound::http::state::HttpState;

/// Clock pinned to 2024-01-15 11:30:45 UTC.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 11, 30, 45)
            .single()
            .unwrap_or_default()
    }
}

/// Handler state backed by a real [`UserService`] over `store`.
pub fn in_memory_state(store: Arc<InMemoryUserStore>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(FixtureClock);
    HttpState::from_service(UserService::new(store, Arc::clone(&clock)), clock)
}
