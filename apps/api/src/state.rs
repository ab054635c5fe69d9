use crate::config::Config;
use crate::roast::service::Roaster;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The roast/improve operations, bound to whichever completion backend
    /// was wired in at startup (the real Groq client, or a scripted one in
    /// tests).
    pub roaster: Roaster,
}
