mod donation_request;
mod error;
