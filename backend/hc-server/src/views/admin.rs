//! Administrator area, rendered inside the admin sidebar

use crate::views::view_response::{Chrome, ViewResponse};
use crate::{AppState, CurrentIdentity};

use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
};
use hc_core::{Application, Child, Sponsorship};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub pending_applications: usize,
    pub children: usize,
    pub sponsors: usize,
    pub total_donated: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsData {
    pub pending: usize,
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenData {
    pub total: usize,
    pub children: Vec<Child>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SponsorshipQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipsData {
    pub search: String,
    pub total_donated: u64,
    pub active_sponsorships: usize,
    pub average_monthly_amount: u64,
    pub sponsorships: Vec<Sponsorship>,
}

/// GET /admin: the area chrome with nothing selected.
pub async fn layout(CurrentIdentity(identity): CurrentIdentity) -> Json<ViewResponse> {
    Json(ViewResponse::page(Chrome::Admin, "layout", identity))
}

/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<DashboardData>> {
    let data = DashboardData {
        pending_applications: state.applications.pending_count().await,
        children: state.catalog.len().await,
        sponsors: state.sponsorships.sponsor_count().await,
        total_donated: state.sponsorships.total_donated().await,
    };

    Json(ViewResponse::with_data(
        Chrome::Admin,
        "admin_dashboard",
        identity,
        data,
    ))
}

/// GET /admin/solicitudes
pub async fn applications(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<ApplicationsData>> {
    let data = ApplicationsData {
        pending: state.applications.pending_count().await,
        applications: state.applications.list().await,
    };

    Json(ViewResponse::with_data(
        Chrome::Admin,
        "admin_applications",
        identity,
        data,
    ))
}

/// GET /admin/ninos
pub async fn children(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse<ChildrenData>> {
    let children = state.catalog.list().await;

    Json(ViewResponse::with_data(
        Chrome::Admin,
        "admin_children",
        identity,
        ChildrenData {
            total: children.len(),
            children,
        },
    ))
}

/// GET /admin/apadrinamientos?search=
///
/// Totals always cover the whole ledger; only the list is filtered.
pub async fn sponsorships(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<SponsorshipQuery>,
) -> Json<ViewResponse<SponsorshipsData>> {
    let ledger = &state.sponsorships;
    let data = SponsorshipsData {
        total_donated: ledger.total_donated().await,
        active_sponsorships: ledger.active_count().await,
        average_monthly_amount: ledger.average_monthly_amount().await,
        sponsorships: ledger.search(&query.search).await,
        search: query.search,
    };

    Json(ViewResponse::with_data(
        Chrome::Admin,
        "admin_sponsorships",
        identity,
        data,
    ))
}

/// Unknown page inside the admin area.
pub async fn not_found(
    OriginalUri(uri): OriginalUri,
    CurrentIdentity(identity): CurrentIdentity,
) -> (StatusCode, Json<ViewResponse>) {
    warn!("No admin view for path {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ViewResponse::page(Chrome::Admin, "not_found", identity)),
    )
}
