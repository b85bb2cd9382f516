mod child;
mod identity;
mod role;
mod sponsorship;
