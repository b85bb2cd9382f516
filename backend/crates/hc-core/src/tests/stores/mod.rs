mod applications;
mod catalog;
mod history;
mod sponsorships;
