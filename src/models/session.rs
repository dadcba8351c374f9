use crate::{consts, models::principal::PrincipalKind, utils};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque login token tracked in a persisted revocation store. Expired rows
/// are evicted lazily; revoked rows keep their `revoked_at` stamp until
/// eviction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub user_id: i64,
    pub user_type: PrincipalKind,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn issue(user_id: i64, user_type: PrincipalKind) -> Self {
        let now = Utc::now();

        Self {
            token: utils::generate_opaque_token(),
            user_id,
            user_type,
            expires_at: now + chrono::Duration::hours(consts::SESSION_TOKEN_TTL_HOURS),
            revoked_at: None,
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_is_fresh() {
        let session = SessionToken::issue(7, PrincipalKind::AnimalOwner);

        assert_eq!(session.user_id, 7);
        assert!(session.revoked_at.is_none());
        assert!(!session.is_expired(Utc::now()));
        assert_eq!(session.token.len(), consts::OPAQUE_TOKEN_BYTES * 2);
    }

    #[test]
    fn test_token_expiry_check() {
        let session = SessionToken::issue(7, PrincipalKind::Veterinarian);
        let past_ttl = Utc::now() + chrono::Duration::hours(consts::SESSION_TOKEN_TTL_HOURS + 1);

        assert!(session.is_expired(past_ttl));
    }
}
