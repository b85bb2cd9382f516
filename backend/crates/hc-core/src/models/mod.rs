pub mod application;
pub mod child;
pub mod history_entry;
pub mod identity;
pub mod notice;
pub mod role;
pub mod sponsorship;
