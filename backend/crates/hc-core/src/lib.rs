pub mod error;
pub mod models;
pub mod stores;

pub use error::{CoreError, Result};
pub use models::application::{Application, ApplicationStatus};
pub use models::child::{Child, ChildDraft};
pub use models::history_entry::{HistoryEntry, HistoryKind, HistoryStatus};
pub use models::identity::Identity;
pub use models::notice::{Notice, NoticeLevel};
pub use models::role::Role;
pub use models::sponsorship::{Sponsorship, SponsorshipStatus};
pub use stores::applications::ApplicationBook;
pub use stores::catalog::ChildCatalog;
pub use stores::history::{HistorySummary, SponsorHistory};
pub use stores::sponsorships::SponsorshipLedger;

#[cfg(test)]
mod tests;
