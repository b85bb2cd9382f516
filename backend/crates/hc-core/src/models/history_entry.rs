use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    Sponsorship,
    Donation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    Active,
    Completed,
}

/// One line of a sponsor's activity history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub kind: HistoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    pub date: NaiveDate,
    pub amount: u64,
    pub status: HistoryStatus,
}

impl HistoryEntry {
    pub fn is_active_sponsorship(&self) -> bool {
        self.kind == HistoryKind::Sponsorship && self.status == HistoryStatus::Active
    }
}
