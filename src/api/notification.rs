//! # Notification API Module
//!
//! Append-only notifications keyed by a (user_id, user_type) pair. Rows
//! are written synchronously by the request that triggers them; there is
//! no push channel.

use crate::{models, repo, rest::errors::ApiError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub user_id: i64,
    pub user_type: Option<models::principal::PrincipalKind>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl CreateNotificationRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.user_id <= 0 {
            return Err(ApiError::missing_field("user_id"));
        }
        if self.user_type.is_none() {
            return Err(ApiError::missing_field("user_type"));
        }
        if self.title.trim().is_empty() {
            return Err(ApiError::missing_field("title"));
        }
        if self.body.trim().is_empty() {
            return Err(ApiError::missing_field("body"));
        }

        Ok(())
    }
}

pub async fn create_notification(
    request: CreateNotificationRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    request.validate()?;

    let notification = models::notification::Notification::new(
        request.user_id,
        request.user_type.unwrap_or(models::principal::PrincipalKind::AnimalOwner),
        request.title.clone(),
        request.body.clone(),
    );

    Ok(repo.insert_notification(&notification).await?)
}

pub async fn list_notifications(
    user_id: i64,
    user_type: models::principal::PrincipalKind,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::notification::Notification>, ApiError> {
    Ok(repo.get_notifications(user_id, user_type).await?)
}

pub async fn mark_notification_read(
    notification_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !repo.mark_notification_read(notification_id).await? {
        return Err(ApiError::not_found("Notification"));
    }

    Ok(())
}
