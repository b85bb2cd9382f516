use crate::SponsorshipLedger;

#[tokio::test]
async fn given_seeded_ledger_when_totals_then_match_seed() {
    let ledger = SponsorshipLedger::seeded();

    assert_eq!(ledger.total_donated().await, 1_420_000);
    assert_eq!(ledger.active_count().await, 5);
    assert_eq!(ledger.sponsor_count().await, 5);
}

#[tokio::test]
async fn given_blank_query_when_search_then_returns_all() {
    let ledger = SponsorshipLedger::seeded();

    assert_eq!(ledger.search("   ").await.len(), 5);
}

#[tokio::test]
async fn given_sponsor_name_when_search_then_filters() {
    let ledger = SponsorshipLedger::seeded();

    let found = ledger.search("garcía").await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].child_name, "Carlos");
}

#[tokio::test]
async fn given_seeded_ledger_when_average_monthly_then_rounded_mean() {
    let ledger = SponsorshipLedger::seeded();

    assert_eq!(ledger.average_monthly_amount().await, 56_000);
}

#[tokio::test]
async fn given_empty_ledger_when_average_monthly_then_zero() {
    let ledger = SponsorshipLedger::new(Vec::new());

    assert_eq!(ledger.average_monthly_amount().await, 0);
    assert_eq!(ledger.sponsor_count().await, 0);
}
