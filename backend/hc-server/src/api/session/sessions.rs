//! Sign-in, sign-out, sponsor registration and password reset

use crate::paths::{HOME_PATH, landing_for};
use crate::{
    ActionResponse, ApiError, ApiResult, AppState, PasswordResetRequest, SignInRequest,
};

use axum::{Json, extract::State};
use hc_core::Notice;
use hc_session::RegistrationRequest;
use log::info;

/// POST /login
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let identity = state.session.sign_in(&req.email, &req.password).await?;

    Ok(Json(
        ActionResponse::notify([Notice::success("¡Bienvenido!")])
            .redirect_to(landing_for(identity.role))
            .with_identity(identity),
    ))
}

/// POST /logout
pub async fn sign_out(State(state): State<AppState>) -> ApiResult<Json<ActionResponse>> {
    state.session.sign_out().await?;

    Ok(Json(ActionResponse::silent().redirect_to(HOME_PATH)))
}

/// POST /registro-apadrinador
pub async fn register_sponsor(
    State(state): State<AppState>,
    Json(req): Json<RegistrationRequest>,
) -> ApiResult<Json<ActionResponse>> {
    if !req.accepts_terms() {
        return Err(ApiError::validation(
            "acceptTerms",
            "Debes aceptar los términos y condiciones",
        ));
    }

    state.session.register(&req).await;

    Ok(Json(
        ActionResponse::notify([
            Notice::success("Solicitud enviada con éxito"),
            Notice::info(
                "Será revisada por la Fundación Huahuacuna. Recibirás respuesta por correo electrónico.",
            ),
        ])
        .redirect_to(HOME_PATH),
    ))
}

/// POST /recuperar-contrasena
///
/// Answers the same way whether or not the address belongs to anyone.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> ApiResult<Json<ActionResponse>> {
    if req.email.trim().is_empty() {
        return Err(ApiError::validation("email", "El correo es requerido"));
    }

    tokio::time::sleep(state.latency.password_reset()).await;
    info!("Password reset requested");

    Ok(Json(ActionResponse::notify([Notice::success(
        "Si tu correo está registrado, recibirás instrucciones para recuperar tu contraseña.",
    )])))
}
