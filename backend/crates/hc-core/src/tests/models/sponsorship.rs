use crate::{Sponsorship, SponsorshipStatus};

use chrono::NaiveDate;

fn sample() -> Sponsorship {
    Sponsorship {
        id: "1".into(),
        child_name: "María".into(),
        child_age: 7,
        sponsor_name: "Juan Pérez".into(),
        sponsor_email: "juan.perez@email.com".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        monthly_amount: 50_000,
        total_donated: 350_000,
        status: SponsorshipStatus::Active,
    }
}

#[test]
fn given_child_name_in_other_case_when_matches_then_true() {
    assert!(sample().matches("MARÍA"));
}

#[test]
fn given_sponsor_email_fragment_when_matches_then_true() {
    assert!(sample().matches("perez@"));
}

#[test]
fn given_unrelated_query_when_matches_then_false() {
    assert!(!sample().matches("sofía"));
}
