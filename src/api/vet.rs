//! # Veterinarian Directory API Module
//!
//! Public directory, search and profile views over the veterinarian table.

use crate::{models, repo, rest::errors::ApiError};
use serde::Serialize;

pub async fn list_veterinarians(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::principal::VetDirectoryEntry>, ApiError> {
    Ok(repo.get_all_veterinarians().await?)
}

/// Case-insensitive substring search over name and specialization. Empty
/// filters match everything, so no filters returns the full directory.
pub async fn search_veterinarians(
    name_query: &str,
    specialization: &str,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::principal::VetDirectoryEntry>, ApiError> {
    Ok(repo
        .search_veterinarians(name_query.trim(), specialization.trim())
        .await?)
}

#[derive(Debug, Serialize)]
pub struct VetProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub clinic: String,
    pub specialization: String,
    pub profile_image: Option<String>,
    pub review_count: i64,
}

pub async fn vet_profile(
    veterinarian_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<VetProfile, ApiError> {
    let Some(vet) = repo.get_veterinarian_by_id(veterinarian_id).await? else {
        return Err(ApiError::not_found("Veterinarian"));
    };

    let review_count = repo.count_vet_reviews(veterinarian_id).await?;

    Ok(VetProfile {
        id: vet.id,
        name: vet.name,
        email: vet.email,
        clinic: vet.clinic,
        specialization: vet.specialization,
        profile_image: vet.profile_image,
        review_count,
    })
}
