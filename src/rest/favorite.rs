//! Favorite endpoint handlers.

use crate::{
    api,
    rest::AppState,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/add_favorite")]
pub async fn add_favorite(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::favorite::FavoriteRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::favorite::add_favorite(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "Favorite added successfully",
    })))
}

#[derive(Debug, Deserialize)]
pub struct FavoriteQuery {
    pub owner_id: i64,
    pub veterinarian_id: i64,
}

#[web::delete("/remove_favorite")]
pub async fn remove_favorite(
    app_state: web::types::State<AppState>,
    query: web::types::Query<FavoriteQuery>,
) -> Result<impl web::Responder, web::Error> {
    api::favorite::remove_favorite(
        api::favorite::FavoriteRequest {
            owner_id: query.owner_id,
            veterinarian_id: query.veterinarian_id,
        },
        &app_state.repo,
    )
    .await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Favorite removed successfully",
    })))
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner_id: i64,
}

#[web::get("/get_favorites")]
pub async fn get_favorites(
    app_state: web::types::State<AppState>,
    query: web::types::Query<OwnerQuery>,
) -> Result<impl web::Responder, web::Error> {
    let favorites = api::favorite::list_favorites(query.owner_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": favorites,
    })))
}
