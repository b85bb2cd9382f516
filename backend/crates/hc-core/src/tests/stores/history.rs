use crate::{HistoryKind, SponsorHistory};

use chrono::NaiveDate;

#[tokio::test]
async fn given_seeded_history_when_summary_then_totals() {
    let history = SponsorHistory::seeded();

    let summary = history.summary().await;

    assert_eq!(summary.total_donated, 280_000);
    assert_eq!(summary.active_sponsorships, 2);
    assert_eq!(summary.last_donation, NaiveDate::from_ymd_opt(2025, 1, 15));
}

#[tokio::test]
async fn given_seeded_history_when_summary_then_newest_first() {
    let summary = SponsorHistory::seeded().summary().await;

    assert_eq!(summary.entries.len(), 5);
    assert_eq!(summary.entries[0].kind, HistoryKind::Donation);
    assert!(summary.entries.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn given_empty_history_when_summary_then_zeroes() {
    let summary = SponsorHistory::default().summary().await;

    assert_eq!(summary.total_donated, 0);
    assert_eq!(summary.last_donation, None);
}
