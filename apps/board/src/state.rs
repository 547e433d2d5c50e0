use std::sync::Arc;

use crate::api_client::RecruitApi;

/// Shared state injected into all route handlers via Axum extractors.
/// The board keeps no per-user state; form sessions live in the browser.
#[derive(Clone)]
pub struct AppState {
    /// Remote recruitment API. `HttpRecruitApi` in production, a fake in tests.
    pub api: Arc<dyn RecruitApi>,
}
