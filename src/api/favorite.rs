//! # Favorite API Module
//!
//! Owner-to-veterinarian bookmarks. Duplicate protection is an existence
//! pre-check at write time, not a database constraint.

use crate::{models, repo, rest::errors::ApiError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteRequest {
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub veterinarian_id: i64,
}

impl FavoriteRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.owner_id <= 0 {
            return Err(ApiError::missing_field("owner_id"));
        }
        if self.veterinarian_id <= 0 {
            return Err(ApiError::missing_field("veterinarian_id"));
        }

        Ok(())
    }
}

pub async fn add_favorite(
    request: FavoriteRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    request.validate()?;

    if repo
        .get_veterinarian_by_id(request.veterinarian_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Veterinarian"));
    }

    if repo
        .favorite_exists(request.owner_id, request.veterinarian_id)
        .await?
    {
        return Err(ApiError::conflict("Veterinarian already in favorites"));
    }

    repo.insert_favorite(request.owner_id, request.veterinarian_id)
        .await?;

    Ok(())
}

pub async fn remove_favorite(
    request: FavoriteRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    request.validate()?;

    if !repo
        .delete_favorite(request.owner_id, request.veterinarian_id)
        .await?
    {
        return Err(ApiError::not_found("Favorite"));
    }

    Ok(())
}

pub async fn list_favorites(
    owner_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::favorite::FavoriteVetView>, ApiError> {
    Ok(repo.get_owner_favorites(owner_id).await?)
}
