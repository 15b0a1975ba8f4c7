//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::infrastructure::persistence::SqliteMappingRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteMappingRepository>>,
    pub resolve_service: Arc<ResolveService<SqliteMappingRepository>>,
    /// Base URL used to render full short URLs on the result page.
    pub base_url: String,
}
