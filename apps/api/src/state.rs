use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Completion;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: OpenRouterClient. Tests swap in a stub.
    pub completion: Arc<dyn Completion>,
    /// Current-question slot for the practice tab. Cleared only by restart.
    pub session: Arc<SessionStore>,
    pub config: Config,
}
