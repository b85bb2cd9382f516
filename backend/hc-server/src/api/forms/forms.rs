//! Donation and volunteering submissions
//!
//! Neither goes anywhere yet: both wait, log, and thank the visitor.

use crate::views::form_options::is_volunteer_type;
use crate::{ActionResponse, ApiError, ApiResult, AppState, DonationRequest, VolunteerRequest};

use axum::{Json, extract::State};
use hc_core::Notice;
use log::info;

const REQUIRED_FIELDS: &str = "Todos los campos son requeridos";

/// POST /donaciones
pub async fn donate(
    State(state): State<AppState>,
    Json(req): Json<DonationRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let Some(amount) = req.final_amount() else {
        return Err(ApiError::validation(
            req.amount_field(),
            "El monto debe ser mayor a cero",
        ));
    };

    tokio::time::sleep(state.latency.donation()).await;

    if req.anonymous {
        info!("Received anonymous donation of {amount}");
    } else {
        info!("Received donation of {amount} from '{}'", req.email);
    }

    Ok(Json(ActionResponse::notify([
        Notice::success("¡Gracias por tu generosidad!"),
        Notice::info(
            "Tu donación ayudará a transformar vidas. Recibirás confirmación por correo.",
        ),
    ])))
}

/// POST /voluntariado
pub async fn volunteer(
    State(state): State<AppState>,
    Json(req): Json<VolunteerRequest>,
) -> ApiResult<Json<ActionResponse>> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() {
        return Err(ApiError::validation("name", REQUIRED_FIELDS));
    }
    if !is_volunteer_type(&req.kind) {
        return Err(ApiError::validation("type", REQUIRED_FIELDS));
    }

    tokio::time::sleep(state.latency.volunteer()).await;
    info!("Volunteer application ({}) from '{}'", req.kind, req.email);

    Ok(Json(ActionResponse::notify([
        Notice::success("¡Solicitud enviada!"),
        Notice::info("Nos pondremos en contacto contigo pronto."),
    ])))
}
