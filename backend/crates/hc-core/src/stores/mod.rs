pub mod applications;
pub mod catalog;
pub mod history;
pub(crate) mod seed;
pub mod sponsorships;
