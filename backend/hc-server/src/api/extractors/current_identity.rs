//! Axum extractor for the live session identity

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use hc_core::Identity;

/// Whoever is signed in when the request arrives, if anyone.
///
/// Read fresh on every request; nothing is cached between requests.
pub struct CurrentIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(CurrentIdentity(state.session.current().await)) }
    }
}
