//! Sponsoring a child, and the administrator's catalog edits

use crate::paths::{SIGN_IN_PATH, SPONSOR_CATALOG_PATH};
use crate::{ActionResponse, ApiError, ApiResult, AppState, CurrentIdentity};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use hc_core::{Child, ChildDraft, Notice, Role};
use hc_session::{AccessDecision, AccessGuard};
use log::info;

/// POST /apadrina/{id}/apadrinar
///
/// Checks who is asking and whether the child is free, then thanks the
/// sponsor. The pairing itself is not recorded.
pub async fn sponsor_child(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<ActionResponse>)> {
    let child = state
        .catalog
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Child {id} not found")))?;

    let guard = AccessGuard::allowing([Role::Sponsor, Role::Administrator]);
    let refusal = match guard.evaluate(identity.as_ref()) {
        AccessDecision::RedirectToSignIn => Some((
            StatusCode::UNAUTHORIZED,
            ActionResponse::notify([Notice::error("Debes iniciar sesión para apadrinar")])
                .redirect_to(SIGN_IN_PATH),
        )),
        AccessDecision::RedirectToHome => Some((
            StatusCode::FORBIDDEN,
            ActionResponse::notify([Notice::error(
                "Solo los padrinos aprobados pueden apadrinar niños",
            )]),
        )),
        AccessDecision::Render if child.sponsored => Some((
            StatusCode::CONFLICT,
            ActionResponse::notify([Notice::error("Este niño ya cuenta con un padrino")]),
        )),
        AccessDecision::Render => None,
    };

    if let Some((status, response)) = refusal {
        return Ok((status, Json(response)));
    }

    info!(
        "Sponsorship confirmed for child {} by '{}'",
        child.id,
        identity.map(|i| i.email).unwrap_or_default()
    );

    Ok((
        StatusCode::OK,
        Json(
            ActionResponse::notify([
                Notice::success("¡Gracias por sembrar esperanza!"),
                Notice::info("Recibirás información detallada en tu correo electrónico."),
            ])
            .redirect_to(SPONSOR_CATALOG_PATH),
        ),
    ))
}

/// POST /admin/ninos
pub async fn create_child(
    State(state): State<AppState>,
    Json(draft): Json<ChildDraft>,
) -> ApiResult<(StatusCode, Json<ActionResponse<Child>>)> {
    let child = state.catalog.add(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ActionResponse::notify([Notice::success("Niño agregado exitosamente")])
                .with_record(child),
        ),
    ))
}

/// PUT /admin/ninos/{id}
pub async fn update_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ChildDraft>,
) -> ApiResult<Json<ActionResponse<Child>>> {
    let child = state.catalog.update(&id, draft).await?;

    Ok(Json(
        ActionResponse::notify([Notice::success("Niño actualizado exitosamente")])
            .with_record(child),
    ))
}

/// DELETE /admin/ninos/{id}
pub async fn delete_child(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionResponse<Child>>> {
    let child = state.catalog.remove(&id).await?;

    Ok(Json(
        ActionResponse::notify([Notice::success("Niño eliminado del catálogo")])
            .with_record(child),
    ))
}
