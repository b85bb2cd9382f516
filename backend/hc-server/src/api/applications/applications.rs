//! Administrator review of sponsor applications

use crate::{ActionResponse, ApiResult, AppState};

use axum::{
    Json,
    extract::{Path, State},
};
use hc_core::{Application, Notice};

/// POST /admin/solicitudes/{id}/aprobar
pub async fn approve_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionResponse<Application>>> {
    let application = state.applications.approve(&id).await?;

    Ok(Json(
        ActionResponse::notify([Notice::success("Solicitud aprobada")]).with_record(application),
    ))
}

/// POST /admin/solicitudes/{id}/rechazar
pub async fn reject_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionResponse<Application>>> {
    let application = state.applications.reject(&id).await?;

    Ok(Json(
        ActionResponse::notify([Notice::error("Solicitud rechazada")]).with_record(application),
    ))
}
