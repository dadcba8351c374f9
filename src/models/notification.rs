use crate::models::principal::PrincipalKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keyed by a (user_id, user_type) pair instead of a foreign key since it
/// must reference either principal kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub user_type: PrincipalKind,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: i64, user_type: PrincipalKind, title: String, body: String) -> Self {
        Self {
            id: 0,
            user_id,
            user_type,
            title,
            body,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
