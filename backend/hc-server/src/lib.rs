pub mod api;
pub mod app_state;
pub mod error;
pub mod guard;
pub mod health;
pub mod logger;
pub mod paths;
pub mod routes;
pub mod views;

#[cfg(test)]
mod tests;

pub use api::{
    action_response::ActionResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::CurrentIdentity,
    forms::{donation_request::DonationRequest, volunteer_request::VolunteerRequest},
    session::{password_reset_request::PasswordResetRequest, sign_in_request::SignInRequest},
};
pub use app_state::AppState;
pub use views::view_response::{Chrome, ViewResponse};

pub use crate::routes::build_router;
