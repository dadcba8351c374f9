//! Notification endpoint handlers.

use crate::{
    api,
    rest::{AppState, identity::parse_kind},
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/create_notification")]
pub async fn create_notification(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::notification::CreateNotificationRequest>,
) -> Result<impl web::Responder, web::Error> {
    let notification_id =
        api::notification::create_notification(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "Notification created successfully",
        "data": { "notification_id": notification_id },
    })))
}

#[derive(Debug, Deserialize)]
pub struct PrincipalQuery {
    pub user_id: i64,
    pub user_type: String,
}

#[web::get("/get_notifications")]
pub async fn get_notifications(
    app_state: web::types::State<AppState>,
    query: web::types::Query<PrincipalQuery>,
) -> Result<impl web::Responder, web::Error> {
    let user_type = parse_kind(&query.user_type)?;
    let notifications =
        api::notification::list_notifications(query.user_id, user_type, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": notifications,
    })))
}

#[web::put("/mark_notification_read/{notification_id}")]
pub async fn mark_notification_read(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::notification::mark_notification_read(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Notification marked as read",
    })))
}
