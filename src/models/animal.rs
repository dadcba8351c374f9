use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub color: String,
    pub species: String,
    pub date_of_birth: NaiveDate,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
