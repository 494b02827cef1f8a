//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site has no mutable server-side data; the state only carries what the
//! health endpoint reports.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Version reported by the health endpoint.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub environment: Arc<str>,
    pub version: &'static str,
}

impl AppState {
    #[must_use]
    pub fn new(environment: &str) -> Self {
        Self { started_at: Instant::now(), environment: Arc::from(environment), version: SERVICE_VERSION }
    }

    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
