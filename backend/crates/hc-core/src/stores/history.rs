use crate::stores::seed;
use crate::{HistoryEntry, HistoryKind};

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::RwLock;

/// Totals shown on the sponsor's profile and history pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_donated: u64,
    pub active_sponsorships: usize,
    pub last_donation: Option<NaiveDate>,
    pub entries: Vec<HistoryEntry>,
}

/// Activity history of the signed-in sponsor.
#[derive(Debug, Clone, Default)]
pub struct SponsorHistory {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl SponsorHistory {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::history())
    }

    /// Entries newest first, with totals across all of them.
    pub async fn summary(&self) -> HistorySummary {
        let mut entries = self.entries.read().await.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        HistorySummary {
            total_donated: entries.iter().map(|e| e.amount).sum(),
            active_sponsorships: entries.iter().filter(|e| e.is_active_sponsorship()).count(),
            last_donation: entries
                .iter()
                .filter(|e| e.kind == HistoryKind::Donation)
                .map(|e| e.date)
                .max(),
            entries,
        }
    }
}
