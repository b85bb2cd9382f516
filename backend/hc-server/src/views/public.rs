//! Pages under the public header and footer

use crate::views::catalog_query::{CatalogData, CatalogQuery};
use crate::views::form_options::{
    DEFAULT_DONATION, DOCUMENT_TYPES, DONATION_PRESETS, FormOption, VOLUNTEER_TYPES,
};
use crate::views::view_response::{Chrome, ViewResponse};
use crate::{AppState, CurrentIdentity};

use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hc_core::{Identity, Role};
use log::warn;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub document_types: &'static [FormOption],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    pub preset_amounts: &'static [u64],
    pub default_amount: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerForm {
    pub volunteer_types: &'static [FormOption],
}

fn public(view: &'static str, identity: Option<Identity>) -> Json<ViewResponse> {
    Json(ViewResponse::page(Chrome::Public, view, identity))
}

/// GET /
pub async fn home(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    public("home", identity)
}

/// GET /login
pub async fn sign_in_page(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    public("login", identity)
}

/// GET /recuperar-contrasena
pub async fn password_reset_page(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse> {
    public("password_reset", identity)
}

/// GET /registro-apadrinador
pub async fn registration_page(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<RegistrationForm>> {
    Json(ViewResponse::with_data(
        Chrome::Public,
        "sponsor_registration",
        identity,
        RegistrationForm {
            document_types: &DOCUMENT_TYPES,
        },
    ))
}

/// GET /apadrina
///
/// Administrators see every child; everyone else only those still
/// waiting for a sponsor.
pub async fn catalog(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<CatalogQuery>,
) -> Json<ViewResponse<CatalogData>> {
    let children = match identity {
        Some(ref i) if i.has_role(Role::Administrator) => state.catalog.list().await,
        _ => state.catalog.available().await,
    };

    Json(ViewResponse::with_data(
        Chrome::Public,
        "catalog",
        identity,
        CatalogData {
            layout: query.view,
            children,
        },
    ))
}

/// GET /apadrina/{id}
///
/// An unknown id renders `child_not_found` in the public chrome.
pub async fn child_detail(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.get(&id).await {
        Some(child) => Json(ViewResponse::with_data(
            Chrome::Public,
            "child_detail",
            identity,
            child,
        ))
        .into_response(),
        None => {
            warn!("No child with id {id}");
            (StatusCode::NOT_FOUND, public("child_not_found", identity)).into_response()
        }
    }
}

/// GET /donaciones
pub async fn donations_page(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<DonationForm>> {
    Json(ViewResponse::with_data(
        Chrome::Public,
        "donations",
        identity,
        DonationForm {
            preset_amounts: &DONATION_PRESETS,
            default_amount: DEFAULT_DONATION,
        },
    ))
}

/// GET /voluntariado
pub async fn volunteering_page(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<VolunteerForm>> {
    Json(ViewResponse::with_data(
        Chrome::Public,
        "volunteering",
        identity,
        VolunteerForm {
            volunteer_types: &VOLUNTEER_TYPES,
        },
    ))
}

/// GET /bitacora
pub async fn blog(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    public("blog", identity)
}

/// GET /proyectos
pub async fn projects(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    public("projects", identity)
}

/// GET /eventos
pub async fn events(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    public("events", identity)
}

/// Anything no route claims.
pub async fn not_found(
    OriginalUri(uri): OriginalUri,
    CurrentIdentity(identity): CurrentIdentity,
) -> (StatusCode, Json<ViewResponse>) {
    warn!("No view for path {}", uri.path());
    (StatusCode::NOT_FOUND, public("not_found", identity))
}
