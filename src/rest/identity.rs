//! Identity endpoint handlers: registration, login/logout, profile lookup
//! and the password-reset pair.

use crate::{
    api, models,
    rest::{AppState, errors},
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/register/animal_owner")]
pub async fn register_animal_owner(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::identity::RegisterOwnerRequest>,
) -> Result<impl web::Responder, web::Error> {
    let registered = api::identity::register_owner(
        request.0,
        &app_state.repo,
        &app_state.identity_mirror,
    )
    .await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "User registered successfully",
        "data": registered,
    })))
}

#[web::post("/register/veterinarian")]
pub async fn register_veterinarian(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::identity::RegisterVetRequest>,
) -> Result<impl web::Responder, web::Error> {
    let registered = api::identity::register_veterinarian(
        request.0,
        &app_state.repo,
        &app_state.identity_mirror,
    )
    .await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "User registered successfully",
        "data": registered,
    })))
}

#[web::post("/login")]
pub async fn login(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::identity::LoginRequest>,
) -> Result<impl web::Responder, web::Error> {
    let outcome = api::identity::login(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Login successful",
        "data": outcome,
    })))
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub token: String,
}

#[web::post("/logout")]
pub async fn logout(
    app_state: web::types::State<AppState>,
    request: web::types::Json<LogoutRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::identity::logout(&request.token, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Logged out successfully",
    })))
}

#[derive(Debug, Deserialize)]
pub struct PrincipalQuery {
    pub user_id: i64,
    pub user_type: String,
}

pub fn parse_kind(raw: &str) -> Result<models::principal::PrincipalKind, errors::ApiError> {
    models::principal::PrincipalKind::parse(raw)
        .ok_or_else(|| errors::ApiError::validation(format!("Invalid user_type: {raw}")))
}

#[web::get("/get_current_user")]
pub async fn get_current_user(
    app_state: web::types::State<AppState>,
    query: web::types::Query<PrincipalQuery>,
) -> Result<impl web::Responder, web::Error> {
    let user_type = parse_kind(&query.user_type)?;
    let profile =
        api::identity::current_principal(query.user_id, user_type, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": profile,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

#[web::post("/forgot_password")]
pub async fn forgot_password(
    app_state: web::types::State<AppState>,
    request: web::types::Json<ForgotPasswordRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::identity::forgot_password(&request.email, &app_state.repo, &app_state.identity_mirror)
        .await?;

    // Same response whether or not the email matched an account.
    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "If this email is associated with an account, a reset link will be sent.",
    })))
}

#[web::post("/reset_password")]
pub async fn reset_password(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::identity::ResetPasswordRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::identity::reset_password(
        request.0,
        &app_state.repo,
        &app_state.identity_mirror,
    )
    .await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Password reset successful!",
    })))
}
