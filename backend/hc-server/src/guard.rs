use crate::AppState;

use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use hc_session::AccessGuard;
use log::info;

/// Middleware in front of a role area.
///
/// Reads the live session on every request. Sends anonymous visitors to the
/// sign-in page and the wrong role home, with 303 See Other.
pub async fn guard_section(
    State((state, guard)): State<(AppState, AccessGuard)>,
    OriginalUri(uri): OriginalUri,
    request: Request,
    next: Next,
) -> Response {
    let identity = state.session.current().await;

    match guard.evaluate(identity.as_ref()).redirect_path() {
        None => next.run(request).await,
        Some(target) => {
            info!("Redirecting {} to {target}", uri.path());
            Redirect::to(target).into_response()
        }
    }
}
