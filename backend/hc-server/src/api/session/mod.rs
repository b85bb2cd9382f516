pub mod password_reset_request;
pub mod sessions;
pub mod sign_in_request;
