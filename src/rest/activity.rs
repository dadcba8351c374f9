//! Activity-log endpoint handlers.

use crate::{
    api,
    rest::{AppState, identity::parse_kind},
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PrincipalQuery {
    pub user_id: i64,
    pub user_type: String,
}

#[web::get("/get_user_activity")]
pub async fn get_user_activity(
    app_state: web::types::State<AppState>,
    query: web::types::Query<PrincipalQuery>,
) -> Result<impl web::Responder, web::Error> {
    let user_type = parse_kind(&query.user_type)?;
    let entries =
        api::activity::list_user_activity(query.user_id, user_type, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "message": "OK",
        "data": entries,
    })))
}
