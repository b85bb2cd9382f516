use crate::api::{applications::applications, children::children, forms::forms, session::sessions};
use crate::views::{admin, public, sponsor};
use crate::{AppState, guard, health};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use hc_core::Role;
use hc_session::AccessGuard;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Build the application router with all endpoints.
///
/// Trailing slashes are trimmed before routing, so `/admin/` reaches the
/// guarded admin area like `/admin` does.
pub fn build_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes(&state))
        .nest("/apadrinador", sponsor_routes(&state))
        .route("/health", get(health::health_check))
        .fallback(public::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Header-and-footer pages plus the forms they submit.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/login", get(public::sign_in_page).post(sessions::sign_in))
        .route("/logout", post(sessions::sign_out))
        .route(
            "/recuperar-contrasena",
            get(public::password_reset_page).post(sessions::reset_password),
        )
        .route(
            "/registro-apadrinador",
            get(public::registration_page).post(sessions::register_sponsor),
        )
        .route("/apadrina", get(public::catalog))
        .route("/apadrina/{id}", get(public::child_detail))
        .route("/apadrina/{id}/apadrinar", post(children::sponsor_child))
        .route("/donaciones", get(public::donations_page).post(forms::donate))
        .route(
            "/voluntariado",
            get(public::volunteering_page).post(forms::volunteer),
        )
        .route("/bitacora", get(public::blog))
        .route("/proyectos", get(public::projects))
        .route("/eventos", get(public::events))
}

/// Everything under /admin, administrators only.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(admin::layout))
        .route("/dashboard", get(admin::dashboard))
        .route("/solicitudes", get(admin::applications))
        .route(
            "/solicitudes/{id}/aprobar",
            post(applications::approve_application),
        )
        .route(
            "/solicitudes/{id}/rechazar",
            post(applications::reject_application),
        )
        .route("/ninos", get(admin::children).post(children::create_child))
        .route(
            "/ninos/{id}",
            put(children::update_child).delete(children::delete_child),
        )
        .route("/apadrinamientos", get(admin::sponsorships))
        .fallback(admin::not_found)
        .layer(middleware::from_fn_with_state(
            (state.clone(), AccessGuard::only(Role::Administrator)),
            guard::guard_section,
        ))
}

/// Everything under /apadrinador, sponsors only.
fn sponsor_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(sponsor::layout))
        .route("/perfil", get(sponsor::profile))
        .route("/catalogo", get(sponsor::catalog))
        .route("/historial", get(sponsor::history))
        .fallback(sponsor::not_found)
        .layer(middleware::from_fn_with_state(
            (state.clone(), AccessGuard::only(Role::Sponsor)),
            guard::guard_section,
        ))
}
