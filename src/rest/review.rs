//! Review endpoint handlers.

use crate::{
    api,
    rest::AppState,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/submit_review")]
pub async fn submit_review(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::review::SubmitReviewRequest>,
) -> Result<impl web::Responder, web::Error> {
    let review_id = api::review::submit_review(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "Review added successfully",
        "data": { "review_id": review_id },
    })))
}

#[derive(Debug, Deserialize)]
pub struct VetQuery {
    pub veterinarian_id: i64,
}

#[web::get("/get_reviews")]
pub async fn get_reviews(
    app_state: web::types::State<AppState>,
    query: web::types::Query<VetQuery>,
) -> Result<impl web::Responder, web::Error> {
    let reviews = api::review::list_vet_reviews(query.veterinarian_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": reviews,
    })))
}
