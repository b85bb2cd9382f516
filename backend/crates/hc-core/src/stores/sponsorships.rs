use crate::stores::seed;
use crate::{Sponsorship, SponsorshipStatus};

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Read-only ledger of sponsor/child pairings.
#[derive(Debug, Clone, Default)]
pub struct SponsorshipLedger {
    sponsorships: Arc<RwLock<Vec<Sponsorship>>>,
}

impl SponsorshipLedger {
    pub fn new(sponsorships: Vec<Sponsorship>) -> Self {
        Self {
            sponsorships: Arc::new(RwLock::new(sponsorships)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::sponsorships())
    }

    pub async fn list(&self) -> Vec<Sponsorship> {
        self.sponsorships.read().await.clone()
    }

    /// Blank queries return everything.
    pub async fn search(&self, query: &str) -> Vec<Sponsorship> {
        let query = query.trim();
        self.sponsorships
            .read()
            .await
            .iter()
            .filter(|s| query.is_empty() || s.matches(query))
            .cloned()
            .collect()
    }

    pub async fn total_donated(&self) -> u64 {
        self.sponsorships
            .read()
            .await
            .iter()
            .map(|s| s.total_donated)
            .sum()
    }

    pub async fn active_count(&self) -> usize {
        self.sponsorships
            .read()
            .await
            .iter()
            .filter(|s| s.status == SponsorshipStatus::Active)
            .count()
    }

    /// Mean monthly contribution, rounded; zero for an empty ledger.
    pub async fn average_monthly_amount(&self) -> u64 {
        let sponsorships = self.sponsorships.read().await;
        if sponsorships.is_empty() {
            return 0;
        }

        let total: u64 = sponsorships.iter().map(|s| s.monthly_amount).sum();
        let count = sponsorships.len() as u64;
        (total + count / 2) / count
    }

    /// Distinct sponsors, keyed by lowercase e-mail.
    pub async fn sponsor_count(&self) -> usize {
        self.sponsorships
            .read()
            .await
            .iter()
            .map(|s| s.sponsor_email.to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }
}
