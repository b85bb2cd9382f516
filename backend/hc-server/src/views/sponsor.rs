//! Sponsor area, rendered inside the sponsor sidebar

use crate::views::catalog_query::{CatalogData, CatalogQuery};
use crate::views::view_response::{Chrome, ViewResponse};
use crate::{AppState, CurrentIdentity};

use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use hc_core::HistorySummary;
use log::warn;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub children_sponsored: usize,
    pub total_donated: u64,
    pub last_donation: Option<NaiveDate>,
}

/// GET /apadrinador: the area chrome with nothing selected.
pub async fn layout(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    Json(ViewResponse::page(Chrome::Sponsor, "layout", identity))
}

/// GET /apadrinador/perfil
pub async fn profile(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<ProfileData>> {
    let summary = state.history.summary().await;

    Json(ViewResponse::with_data(
        Chrome::Sponsor,
        "sponsor_profile",
        identity,
        ProfileData {
            children_sponsored: summary.active_sponsorships,
            total_donated: summary.total_donated,
            last_donation: summary.last_donation,
        },
    ))
}

/// GET /apadrinador/catalogo
pub async fn catalog(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<CatalogQuery>,
) -> Json<ViewResponse<CatalogData>> {
    Json(ViewResponse::with_data(
        Chrome::Sponsor,
        "sponsor_catalog",
        identity,
        CatalogData {
            layout: query.view,
            children: state.catalog.available().await,
        },
    ))
}

/// GET /apadrinador/historial
pub async fn history(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<HistorySummary>> {
    Json(ViewResponse::with_data(
        Chrome::Sponsor,
        "sponsor_history",
        identity,
        state.history.summary().await,
    ))
}

pub async fn not_found(
    OriginalUri(uri): OriginalUri,
    CurrentIdentity(identity): CurrentIdentity,
) -> (StatusCode, Json<ViewResponse>) {
    warn!("No sponsor view for path {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ViewResponse::page(Chrome::Sponsor, "not_found", identity)),
    )
}
