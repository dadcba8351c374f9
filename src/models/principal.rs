use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Discriminator between the two account tables sharing one email space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum PrincipalKind {
    #[serde(rename = "animal_owner")]
    #[display("animal_owner")]
    AnimalOwner,
    #[serde(rename = "veterinarian")]
    #[display("veterinarian")]
    Veterinarian,
}

impl PrincipalKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "animal_owner" => Some(PrincipalKind::AnimalOwner),
            "veterinarian" => Some(PrincipalKind::Veterinarian),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalOwner {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Veterinarian {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub license_number: String,
    pub national_id: String,
    pub clinic: String,
    pub specialization: String,
    pub profile_image: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// An account resolved from either table, tagged with its kind. Lookups by
/// email or reset token return this so callers never re-implement the
/// try-owner-then-vet dance.
#[derive(Debug, Clone)]
pub enum Principal {
    Owner(AnimalOwner),
    Vet(Veterinarian),
}

impl Principal {
    pub fn id(&self) -> i64 {
        match self {
            Principal::Owner(owner) => owner.id,
            Principal::Vet(vet) => vet.id,
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::Owner(_) => PrincipalKind::AnimalOwner,
            Principal::Vet(_) => PrincipalKind::Veterinarian,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Principal::Owner(owner) => &owner.name,
            Principal::Vet(vet) => &vet.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Owner(owner) => &owner.email,
            Principal::Vet(vet) => &vet.email,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Principal::Owner(owner) => &owner.password_hash,
            Principal::Vet(vet) => &vet.password_hash,
        }
    }

    pub fn reset_token_expiry(&self) -> Option<DateTime<Utc>> {
        match self {
            Principal::Owner(owner) => owner.reset_token_expiry,
            Principal::Vet(vet) => vet.reset_token_expiry,
        }
    }
}

/// Veterinarian row shaped for the public directory and search listings.
#[derive(Debug, Clone, Serialize)]
pub struct VetDirectoryEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub clinic: String,
    pub specialization: String,
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_kind_parse() {
        assert_eq!(
            PrincipalKind::parse("animal_owner"),
            Some(PrincipalKind::AnimalOwner)
        );
        assert_eq!(
            PrincipalKind::parse("veterinarian"),
            Some(PrincipalKind::Veterinarian)
        );
        assert_eq!(PrincipalKind::parse("staff"), None);
        assert_eq!(PrincipalKind::parse(""), None);
    }

    #[test]
    fn test_principal_kind_display_matches_wire_format() {
        assert_eq!(PrincipalKind::AnimalOwner.to_string(), "animal_owner");
        assert_eq!(PrincipalKind::Veterinarian.to_string(), "veterinarian");
    }
}
