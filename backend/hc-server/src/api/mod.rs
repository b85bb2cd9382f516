pub mod action_response;
pub mod applications;
pub mod children;
pub mod error;
pub mod extractors;
pub mod forms;
pub mod session;
