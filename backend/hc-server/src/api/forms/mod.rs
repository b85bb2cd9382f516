pub mod donation_request;
pub mod forms;
pub mod volunteer_request;
