//! Veterinarian directory endpoint handlers.

use crate::{
    api,
    rest::AppState,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::get("/get_veterinarians")]
pub async fn get_veterinarians(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let vets = api::vet::list_veterinarians(&app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": vets,
    })))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub specialization: String,
}

#[web::get("/search_veterinarians")]
pub async fn search_veterinarians(
    app_state: web::types::State<AppState>,
    query: web::types::Query<SearchQuery>,
) -> Result<impl web::Responder, web::Error> {
    let vets =
        api::vet::search_veterinarians(&query.query, &query.specialization, &app_state.repo)
            .await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": vets,
    })))
}

#[web::get("/get_vet_profile/{veterinarian_id}")]
pub async fn get_vet_profile(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let profile = api::vet::vet_profile(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": profile,
    })))
}
