//! Shared application state injected into every handler.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::{GreetingService, LinkService};
use crate::config::NotFoundMode;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// State cloned into each request.
///
/// The registry lives as long as the last clone of this state; it is created in
/// [`crate::server::run`] and dropped on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub greeting_service: Arc<GreetingService>,
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub not_found_mode: NotFoundMode,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryLinkRepository>, not_found_mode: NotFoundMode) -> Self {
        Self {
            greeting_service: Arc::new(GreetingService::new()),
            link_service: Arc::new(LinkService::new(repository)),
            not_found_mode,
            started_at: Utc::now(),
        }
    }
}
