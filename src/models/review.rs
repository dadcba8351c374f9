use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub veterinarian_id: i64,
    pub owner_id: i64,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

/// Review joined with the author's display name.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub id: i64,
    pub veterinarian_id: i64,
    pub owner_id: i64,
    pub owner_name: String,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}
