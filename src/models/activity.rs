use crate::models::principal::PrincipalKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of notable user actions, written in the same
/// transaction as the operation it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: i64,
    pub user_id: i64,
    pub user_type: PrincipalKind,
    pub activity_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl UserActivity {
    pub fn new(
        user_id: i64,
        user_type: PrincipalKind,
        activity_type: &str,
        description: String,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            user_type,
            activity_type: activity_type.to_string(),
            description,
            created_at: Utc::now(),
        }
    }
}
