use std::sync::Arc;

use hc_config::LatencyConfig;
use hc_core::{ApplicationBook, ChildCatalog, SponsorHistory, SponsorshipLedger};
use hc_session::SessionStore;

/// Shared state handed to every handler.
///
/// The session is the only thing a visitor's actions change outside the
/// admin area; the stores start from the seeded programme data each run.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub catalog: ChildCatalog,
    pub applications: ApplicationBook,
    pub sponsorships: SponsorshipLedger,
    pub history: SponsorHistory,
    pub latency: LatencyConfig,
}

impl AppState {
    /// State over the seeded stores.
    pub fn seeded(session: Arc<SessionStore>, latency: LatencyConfig) -> Self {
        Self {
            session,
            catalog: ChildCatalog::seeded(),
            applications: ApplicationBook::seeded(),
            sponsorships: SponsorshipLedger::seeded(),
            history: SponsorHistory::seeded(),
            latency,
        }
    }
}
