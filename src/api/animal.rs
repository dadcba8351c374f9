//! # Animal API Module
//!
//! Pet-profile management scoped to an owner: registration, listing,
//! partial updates and deletion.

use crate::{consts, models, repo, rest::errors::ApiError};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterAnimalRequest {
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub species: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RegisterAnimalRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.owner_id <= 0 {
            return Err(ApiError::missing_field("owner_id"));
        }

        for (field, value) in [
            ("name", &self.name),
            ("gender", &self.gender),
            ("color", &self.color),
            ("species", &self.species),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::missing_field(field));
            }
        }

        if self.date_of_birth.is_none() {
            return Err(ApiError::missing_field("date_of_birth"));
        }

        Ok(())
    }
}

pub async fn register_animal(
    request: RegisterAnimalRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    request.validate()?;

    if repo.get_animal_owner_by_id(request.owner_id).await?.is_none() {
        return Err(ApiError::not_found("Owner"));
    }

    let now = Utc::now();
    let animal = models::animal::Animal {
        id: 0,
        owner_id: request.owner_id,
        name: request.name.clone(),
        breed: request.breed.clone(),
        gender: request.gender.clone(),
        color: request.color.clone(),
        species: request.species.clone(),
        date_of_birth: request.date_of_birth.unwrap_or_default(),
        image_url: request.image_url.clone(),
        created_at: now,
        updated_at: now,
    };
    let activity = models::activity::UserActivity::new(
        request.owner_id,
        models::principal::PrincipalKind::AnimalOwner,
        consts::ANIMAL_REGISTRATION_ACTIVITY,
        format!("Registered animal: {}", request.name),
    );

    Ok(repo.insert_animal(&animal, &activity).await?)
}

pub async fn list_animals(
    owner_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::animal::Animal>, ApiError> {
    Ok(repo.get_animals_by_owner(owner_id).await?)
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnimalRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub species: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub image_url: Option<String>,
}

pub async fn update_animal(
    animal_id: i64,
    request: UpdateAnimalRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let Some(mut animal) = repo.get_animal_by_id(animal_id).await? else {
        return Err(ApiError::not_found("Animal"));
    };

    if let Some(name) = request.name {
        animal.name = name;
    }
    if let Some(breed) = request.breed {
        animal.breed = breed;
    }
    if let Some(gender) = request.gender {
        animal.gender = gender;
    }
    if let Some(color) = request.color {
        animal.color = color;
    }
    if let Some(species) = request.species {
        animal.species = species;
    }
    if let Some(date_of_birth) = request.date_of_birth {
        animal.date_of_birth = date_of_birth;
    }
    if let Some(image_url) = request.image_url {
        animal.image_url = Some(image_url);
    }

    Ok(repo.update_animal(&animal).await?)
}

pub async fn delete_animal(animal_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if repo.get_animal_by_id(animal_id).await?.is_none() {
        return Err(ApiError::not_found("Animal"));
    }

    Ok(repo.delete_animal(animal_id).await?)
}
