//! Animal endpoint handlers.

use crate::{
    api,
    rest::AppState,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/register_animal")]
pub async fn register_animal(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::animal::RegisterAnimalRequest>,
) -> Result<impl web::Responder, web::Error> {
    let animal_id = api::animal::register_animal(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "Animal registered successfully",
        "data": { "animal_id": animal_id },
    })))
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner_id: i64,
}

#[web::get("/get_animals")]
pub async fn get_animals(
    app_state: web::types::State<AppState>,
    query: web::types::Query<OwnerQuery>,
) -> Result<impl web::Responder, web::Error> {
    let animals = api::animal::list_animals(query.owner_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": animals,
    })))
}

#[web::put("/update_animal/{animal_id}")]
pub async fn update_animal(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    request: web::types::Json<api::animal::UpdateAnimalRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::animal::update_animal(path.0, request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Animal updated successfully",
    })))
}

#[web::delete("/delete_animal/{animal_id}")]
pub async fn delete_animal(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::animal::delete_animal(path.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Animal deleted successfully",
    })))
}
