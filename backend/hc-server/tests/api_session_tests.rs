//! Integration tests for sign-in, sign-out, registration and password reset
mod common;

use crate::common::{
    ADMIN_EMAIL, ADMIN_SECRET, SPONSOR_EMAIL, SPONSOR_PASSWORD, create_test_app_state,
    post_empty, post_json, signed_in_as_sponsor,
};

use axum::http::StatusCode;
use hc_core::Role;
use serde_json::json;

#[tokio::test]
async fn given_admin_credentials_when_login_then_welcome_and_dashboard_redirect() {
    // Given: Nobody signed in
    let state = create_test_app_state();

    // When: Posting the administrator credentials
    let response = post_json(
        &state,
        "/login",
        json!({ "email": ADMIN_EMAIL, "password": ADMIN_SECRET }),
    )
    .await;

    // Then: Welcome notice, admin landing, administrator identity
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["notices"][0]["level"], "success");
    assert_eq!(response.json["notices"][0]["message"], "¡Bienvenido!");
    assert_eq!(response.json["redirect"], "/admin/dashboard");
    assert_eq!(response.json["identity"]["role"], "administrator");
    assert_eq!(response.json["identity"]["displayName"], "Administrador");

    let current = state.session.current().await.unwrap();
    assert_eq!(current.role, Role::Administrator);
}

#[tokio::test]
async fn given_three_emoji_password_when_login_then_signed_in_as_sponsor() {
    // Given: Nobody signed in
    let state = create_test_app_state();

    // When: The password is three astral-plane characters (six UTF-16 units)
    let response = post_json(
        &state,
        "/login",
        json!({ "email": "a@b.co", "password": "😀😀😀" }),
    )
    .await;

    // Then: Long enough for a sponsor
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["identity"]["role"], "sponsor");
    assert_eq!(response.json["redirect"], "/apadrinador/catalogo");
}

#[tokio::test]
async fn given_plausible_credentials_when_login_then_sponsor_catalog_redirect() {
    let state = create_test_app_state();

    let response = post_json(
        &state,
        "/login",
        json!({ "email": SPONSOR_EMAIL, "password": SPONSOR_PASSWORD }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["redirect"], "/apadrinador/catalogo");
    assert_eq!(response.json["identity"]["role"], "sponsor");
    assert_eq!(response.json["identity"]["displayName"], "someone");
    assert_eq!(response.json["identity"]["approved"], true);
}

#[tokio::test]
async fn given_bad_credentials_when_login_then_401_and_session_empty() {
    let state = create_test_app_state();

    let response = post_json(
        &state,
        "/login",
        json!({ "email": "bademail", "password": "123" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(
        response.json["error"]["message"],
        "Credenciales inválidas. Por favor verifica tus datos."
    );
    assert!(state.session.current().await.is_none());
}

#[tokio::test]
async fn given_signed_in_sponsor_when_logout_then_session_cleared_and_home_redirect() {
    let state = signed_in_as_sponsor().await;

    let response = post_empty(&state, "/logout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["redirect"], "/");
    assert!(state.session.current().await.is_none());
}

#[tokio::test]
async fn given_nobody_signed_in_when_logout_then_still_ok() {
    let state = create_test_app_state();

    let response = post_empty(&state, "/logout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["redirect"], "/");
}

#[tokio::test]
async fn given_terms_not_accepted_when_register_then_400_on_accept_terms() {
    let state = create_test_app_state();

    let response = post_json(
        &state,
        "/registro-apadrinador",
        json!({ "fullName": "Ana Martínez", "email": "ana@example.com", "acceptTerms": false }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "acceptTerms");
    assert_eq!(
        response.json["error"]["message"],
        "Debes aceptar los términos y condiciones"
    );
}

#[tokio::test]
async fn given_terms_accepted_when_register_then_success_info_and_home_redirect() {
    let state = create_test_app_state();

    let response = post_json(
        &state,
        "/registro-apadrinador",
        json!({
            "fullName": "Ana Martínez",
            "documentType": "CC",
            "document": "123456789",
            "email": "ana@example.com",
            "motivation": "Quiero ayudar",
            "acceptTerms": true
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["notices"][0]["message"], "Solicitud enviada con éxito");
    assert_eq!(response.json["notices"][1]["level"], "info");
    assert_eq!(response.json["redirect"], "/");
    // Registration never signs anyone in
    assert!(state.session.current().await.is_none());
}

#[tokio::test]
async fn given_any_email_when_password_reset_then_same_success_notice() {
    let state = create_test_app_state();

    let known = post_json(&state, "/recuperar-contrasena", json!({ "email": ADMIN_EMAIL })).await;
    let unknown = post_json(
        &state,
        "/recuperar-contrasena",
        json!({ "email": "nadie@example.com" }),
    )
    .await;

    assert_eq!(known.status, StatusCode::OK);
    assert_eq!(known.json, unknown.json);
    assert_eq!(
        known.json["notices"][0]["message"],
        "Si tu correo está registrado, recibirás instrucciones para recuperar tu contraseña."
    );
}

#[tokio::test]
async fn given_blank_email_when_password_reset_then_400() {
    let state = create_test_app_state();

    let response = post_json(&state, "/recuperar-contrasena", json!({ "email": "  " })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "email");
}
