use chrono::{DateTime, Utc};
use serde::Serialize;

/// Bookmark relation from an owner to a veterinarian, joined with the vet
/// display data list views show.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteVetView {
    pub veterinarian_id: i64,
    pub name: String,
    pub clinic: String,
    pub specialization: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}
