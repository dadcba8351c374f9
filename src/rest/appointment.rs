//! Appointment endpoint handlers.

use crate::{
    api,
    rest::AppState,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[web::post("/book_appointment")]
pub async fn book_appointment(
    app_state: web::types::State<AppState>,
    request: web::types::Json<api::appointment::BookAppointmentRequest>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id =
        api::appointment::book(request.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&json!({
        "message": "Appointment booked successfully",
        "data": { "appointment_id": appointment_id, "status": "Pending" },
    })))
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner_id: i64,
}

#[web::get("/get_appointments")]
pub async fn get_appointments(
    app_state: web::types::State<AppState>,
    query: web::types::Query<OwnerQuery>,
) -> Result<impl web::Responder, web::Error> {
    let appointments =
        api::appointment::list_owner_appointments(query.owner_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": appointments,
    })))
}

#[derive(Debug, Deserialize)]
pub struct VetQuery {
    pub veterinarian_id: i64,
}

#[web::get("/get_vet_appointments")]
pub async fn get_vet_appointments(
    app_state: web::types::State<AppState>,
    query: web::types::Query<VetQuery>,
) -> Result<impl web::Responder, web::Error> {
    let appointments =
        api::appointment::list_vet_appointments(query.veterinarian_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": appointments,
    })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub appointment_id: i64,
    #[serde(default)]
    pub status: String,
}

#[web::post("/update_appointment_status")]
pub async fn update_appointment_status(
    app_state: web::types::State<AppState>,
    request: web::types::Json<UpdateStatusRequest>,
) -> Result<impl web::Responder, web::Error> {
    let status = api::appointment::update_status(
        request.appointment_id,
        &request.status,
        &app_state.repo,
    )
    .await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Appointment status updated",
        "data": { "status": status },
    })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateDetailsRequest {
    #[serde(default)]
    pub appointment_id: i64,
    #[serde(flatten)]
    pub fields: api::appointment::UpdateAppointmentRequest,
}

#[web::post("/update_appointment")]
pub async fn update_appointment(
    app_state: web::types::State<AppState>,
    request: web::types::Json<UpdateDetailsRequest>,
) -> Result<impl web::Responder, web::Error> {
    let request = request.0;
    api::appointment::update_details(request.appointment_id, request.fields, &app_state.repo)
        .await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "Appointment updated successfully",
    })))
}

#[derive(Debug, Deserialize)]
pub struct AnimalQuery {
    pub animal_id: i64,
}

#[web::get("/get_animal_appointment_history")]
pub async fn get_animal_appointment_history(
    app_state: web::types::State<AppState>,
    query: web::types::Query<AnimalQuery>,
) -> Result<impl web::Responder, web::Error> {
    let history =
        api::appointment::animal_history(query.animal_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": history,
    })))
}
