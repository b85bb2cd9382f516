use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorshipStatus {
    Active,
    Inactive,
}

/// A sponsor paired with a child, as listed in the admin area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsorship {
    pub id: String,
    pub child_name: String,
    pub child_age: u8,
    pub sponsor_name: String,
    pub sponsor_email: String,
    pub start_date: NaiveDate,
    /// Pesos per month
    pub monthly_amount: u64,
    pub total_donated: u64,
    pub status: SponsorshipStatus,
}

impl Sponsorship {
    /// Case-insensitive match on child name, sponsor name or sponsor e-mail.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.child_name.to_lowercase().contains(&query)
            || self.sponsor_name.to_lowercase().contains(&query)
            || self.sponsor_email.to_lowercase().contains(&query)
    }
}
