//! # Identity API Module
//!
//! Registration, login, logout and password reset for both principal
//! kinds. The two account tables share one email-uniqueness space, so
//! every registration pre-checks both tables before writing.

use crate::{consts, models, repo, rest::errors::ApiError, services, utils};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterOwnerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterOwnerRequest {
    fn validate(&self) -> Result<(), ApiError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("location", &self.location),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::missing_field(field));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterVetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub clinic: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl RegisterVetRequest {
    fn validate(&self) -> Result<(), ApiError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("license_number", &self.license_number),
            ("national_id", &self.national_id),
            ("clinic", &self.clinic),
            ("specialization", &self.specialization),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::missing_field(field));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisteredPrincipal {
    pub user_id: i64,
    pub user_type: models::principal::PrincipalKind,
}

/// Rejects the registration when the email already belongs to either kind
/// of account.
async fn ensure_email_unused(email: &str, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if repo.find_principal_by_email(email).await?.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }

    Ok(())
}

fn mirror_account_creation_failed(err: anyhow::Error) {
    log::warn!("identity mirror account creation failed: {err:#}");
}

/// Registers a new animal-owner account.
///
/// # Arguments
/// * `request` - Registration form fields
/// * `repo` - Repository instance for database operations
/// * `mirror` - External identity provider the account is mirrored to
///
/// # Process
/// 1. Validate required fields are present
/// 2. Pre-check email against both account tables and phone against owners
/// 3. Hash the password and persist the account with its activity entry
/// 4. Mirror the account to the external provider (best-effort)
///
/// # Errors
/// `Validation` on missing fields, `Conflict` on a uniqueness violation.
/// Mirror failures are logged and never fail the registration.
pub async fn register_owner(
    request: RegisterOwnerRequest,
    repo: &repo::ImplAppRepo,
    mirror: &services::ImplIdentityMirror,
) -> Result<RegisteredPrincipal, ApiError> {
    request.validate()?;
    ensure_email_unused(&request.email, repo).await?;

    if repo.owner_phone_exists(&request.phone).await? {
        return Err(ApiError::conflict("Phone number already registered"));
    }

    let now = Utc::now();
    let owner = models::principal::AnimalOwner {
        id: 0,
        name: request.name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        location: request.location.clone(),
        password_hash: utils::hash_password(&request.password)?,
        reset_token: None,
        reset_token_expiry: None,
        created_at: now,
    };
    let activity = models::activity::UserActivity::new(
        0,
        models::principal::PrincipalKind::AnimalOwner,
        consts::REGISTRATION_ACTIVITY,
        format!("Registered account for {}", request.email),
    );

    let owner_id = repo.insert_animal_owner(&owner, &activity).await?;

    if let Err(err) = mirror
        .create_account(&request.email, &request.password, &request.name)
        .await
    {
        mirror_account_creation_failed(err);
    }

    Ok(RegisteredPrincipal {
        user_id: owner_id,
        user_type: models::principal::PrincipalKind::AnimalOwner,
    })
}

pub async fn register_veterinarian(
    request: RegisterVetRequest,
    repo: &repo::ImplAppRepo,
    mirror: &services::ImplIdentityMirror,
) -> Result<RegisteredPrincipal, ApiError> {
    request.validate()?;
    ensure_email_unused(&request.email, repo).await?;

    if repo.vet_license_exists(&request.license_number).await? {
        return Err(ApiError::conflict("License number already registered"));
    }
    if repo.vet_national_id_exists(&request.national_id).await? {
        return Err(ApiError::conflict("National id already registered"));
    }

    let vet = models::principal::Veterinarian {
        id: 0,
        name: request.name.clone(),
        email: request.email.clone(),
        password_hash: utils::hash_password(&request.password)?,
        license_number: request.license_number.clone(),
        national_id: request.national_id.clone(),
        clinic: request.clinic.clone(),
        specialization: request.specialization.clone(),
        profile_image: request.profile_image.clone(),
        reset_token: None,
        reset_token_expiry: None,
        created_at: Utc::now(),
    };
    let activity = models::activity::UserActivity::new(
        0,
        models::principal::PrincipalKind::Veterinarian,
        consts::REGISTRATION_ACTIVITY,
        format!("Registered account for {}", request.email),
    );

    let vet_id = repo.insert_veterinarian(&vet, &activity).await?;

    if let Err(err) = mirror
        .create_account(&request.email, &request.password, &request.name)
        .await
    {
        mirror_account_creation_failed(err);
    }

    Ok(RegisteredPrincipal {
        user_id: vet_id,
        user_type: models::principal::PrincipalKind::Veterinarian,
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginOutcome {
    pub user_id: i64,
    pub user_type: models::principal::PrincipalKind,
    pub name: String,
    pub token: String,
}

/// Verifies credentials against the unified principal lookup. Unknown
/// emails burn a dummy verification so the response shape and timing match
/// a wrong-password attempt.
pub async fn login(request: LoginRequest, repo: &repo::ImplAppRepo) -> Result<LoginOutcome, ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Auth);
    }

    let Some(principal) = repo.find_principal_by_email(&request.email).await? else {
        utils::burn_password_verification(&request.password);
        return Err(ApiError::Auth);
    };

    if !utils::verify_password(&request.password, principal.password_hash()) {
        return Err(ApiError::Auth);
    }

    // Lazy eviction keeps the revocation store from growing unbounded.
    repo.purge_expired_session_tokens(Utc::now()).await?;

    let session = models::session::SessionToken::issue(principal.id(), principal.kind());
    repo.insert_session_token(&session).await?;

    Ok(LoginOutcome {
        user_id: principal.id(),
        user_type: principal.kind(),
        name: principal.name().to_string(),
        token: session.token,
    })
}

pub async fn logout(token: &str, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if token.trim().is_empty() {
        return Err(ApiError::missing_field("token"));
    }

    if !repo.revoke_session_token(token, Utc::now()).await? {
        return Err(ApiError::not_found("Session token"));
    }

    Ok(())
}

/// Kind-specific profile fields for the logged-in principal.
#[derive(Debug, Serialize)]
pub struct PrincipalProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub user_type: models::principal::PrincipalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

pub async fn current_principal(
    user_id: i64,
    user_type: models::principal::PrincipalKind,
    repo: &repo::ImplAppRepo,
) -> Result<PrincipalProfile, ApiError> {
    match user_type {
        models::principal::PrincipalKind::AnimalOwner => {
            let owner = repo
                .get_animal_owner_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::not_found("User"))?;

            Ok(PrincipalProfile {
                id: owner.id,
                name: owner.name,
                email: owner.email,
                user_type,
                phone: Some(owner.phone),
                location: Some(owner.location),
                clinic: None,
                specialization: None,
                profile_image: None,
            })
        }
        models::principal::PrincipalKind::Veterinarian => {
            let vet = repo
                .get_veterinarian_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::not_found("User"))?;

            Ok(PrincipalProfile {
                id: vet.id,
                name: vet.name,
                email: vet.email,
                user_type,
                phone: None,
                location: None,
                clinic: Some(vet.clinic),
                specialization: Some(vet.specialization),
                profile_image: vet.profile_image,
            })
        }
    }
}

/// Issues a reset token when the email matches an account. The response is
/// identical either way so the endpoint cannot be used to enumerate
/// accounts.
pub async fn forgot_password(
    email: &str,
    repo: &repo::ImplAppRepo,
    mirror: &services::ImplIdentityMirror,
) -> Result<(), ApiError> {
    let Some(principal) = repo.find_principal_by_email(email).await? else {
        return Ok(());
    };

    let token = utils::generate_opaque_token();
    let expiry = Utc::now() + Duration::minutes(consts::RESET_TOKEN_TTL_MINUTES);

    repo.set_reset_token(principal.id(), principal.kind(), &token, expiry)
        .await?;

    if let Err(err) = mirror.send_reset_link(email).await {
        log::warn!("identity mirror reset link failed: {err:#}");
    }

    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub new_password: String,
}

pub async fn reset_password(
    request: ResetPasswordRequest,
    repo: &repo::ImplAppRepo,
    mirror: &services::ImplIdentityMirror,
) -> Result<(), ApiError> {
    if request.new_password.trim().is_empty() {
        return Err(ApiError::missing_field("new_password"));
    }

    let Some(principal) = repo.find_principal_by_reset_token(&request.token).await? else {
        return Err(ApiError::InvalidToken);
    };

    if let Some(expiry) = principal.reset_token_expiry() {
        if Utc::now() > expiry {
            return Err(ApiError::ExpiredToken);
        }
    }

    let password_hash = utils::hash_password(&request.new_password)?;
    repo.update_password_and_clear_reset_token(principal.id(), principal.kind(), &password_hash)
        .await?;

    if let Err(err) = mirror
        .update_password(principal.email(), &request.new_password)
        .await
    {
        log::warn!("identity mirror password update failed: {err:#}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use crate::services::MockIdentityMirror;
    use mockall::predicate::*;

    fn owner_request() -> RegisterOwnerRequest {
        RegisterOwnerRequest {
            name: "A".into(),
            email: "a@x.com".into(),
            phone: "1".into(),
            location: "L".into(),
            password: "p".into(),
        }
    }

    fn vet_request() -> RegisterVetRequest {
        RegisterVetRequest {
            name: "Dr. V".into(),
            email: "vet@x.com".into(),
            password: "p".into(),
            license_number: "LIC-1".into(),
            national_id: "NID-1".into(),
            clinic: "Happy Paws".into(),
            specialization: "Surgery".into(),
            profile_image: None,
        }
    }

    fn test_owner(id: i64, email: &str, password: &str) -> models::principal::AnimalOwner {
        models::principal::AnimalOwner {
            id,
            name: "A".into(),
            email: email.into(),
            phone: "1".into(),
            location: "L".into(),
            password_hash: utils::hash_password(password).unwrap(),
            reset_token: None,
            reset_token_expiry: None,
            created_at: Utc::now(),
        }
    }

    fn noop_mirror() -> Box<dyn services::IdentityMirror> {
        let mut mirror = MockIdentityMirror::new();
        mirror.expect_create_account().returning(|_, _, _| Ok(()));
        mirror.expect_send_reset_link().returning(|_| Ok(()));
        mirror.expect_update_password().returning(|_, _| Ok(()));
        Box::new(mirror)
    }

    #[ntex::test]
    async fn test_register_owner_success() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_owner_phone_exists()
            .with(eq("1"))
            .times(1)
            .returning(|_| Ok(false));
        mock_repo
            .expect_insert_animal_owner()
            .withf(|owner, activity| {
                owner.email == "a@x.com"
                    && owner.password_hash.starts_with("$argon2")
                    && activity.activity_type == consts::REGISTRATION_ACTIVITY
            })
            .times(1)
            .returning(|_, _| Ok(11));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = register_owner(owner_request(), &mock_repo, &noop_mirror()).await;

        let registered = result.unwrap();
        assert_eq!(registered.user_id, 11);
        assert_eq!(
            registered.user_type,
            models::principal::PrincipalKind::AnimalOwner
        );
    }

    #[ntex::test]
    async fn test_register_owner_missing_field_hits_no_repo() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let request = RegisterOwnerRequest {
            email: "".into(),
            ..owner_request()
        };
        let result = register_owner(request, &mock_repo, &noop_mirror()).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_register_owner_duplicate_email_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .times(1)
            .returning(|_| {
                Ok(Some(models::principal::Principal::Owner(test_owner(
                    1, "a@x.com", "p",
                ))))
            });

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = register_owner(owner_request(), &mock_repo, &noop_mirror()).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_register_owner_email_taken_by_vet_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .times(1)
            .returning(|_| {
                Ok(Some(models::principal::Principal::Vet(
                    models::principal::Veterinarian {
                        id: 3,
                        name: "Dr. V".into(),
                        email: "a@x.com".into(),
                        password_hash: "h".into(),
                        license_number: "LIC-1".into(),
                        national_id: "NID-1".into(),
                        clinic: "C".into(),
                        specialization: "S".into(),
                        profile_image: None,
                        reset_token: None,
                        reset_token_expiry: None,
                        created_at: Utc::now(),
                    },
                )))
            });

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = register_owner(owner_request(), &mock_repo, &noop_mirror()).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_register_owner_succeeds_even_when_mirror_fails() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| Ok(None));
        mock_repo.expect_owner_phone_exists().returning(|_| Ok(false));
        mock_repo
            .expect_insert_animal_owner()
            .returning(|_, _| Ok(5));

        let mut mirror = MockIdentityMirror::new();
        mirror
            .expect_create_account()
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("provider unreachable")));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let mirror: Box<dyn services::IdentityMirror> = Box::new(mirror);
        let result = register_owner(owner_request(), &mock_repo, &mirror).await;

        assert!(result.is_ok_and(|r| r.user_id == 5));
    }

    #[ntex::test]
    async fn test_register_veterinarian_duplicate_license_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| Ok(None));
        mock_repo
            .expect_vet_license_exists()
            .with(eq("LIC-1"))
            .times(1)
            .returning(|_| Ok(true));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = register_veterinarian(vet_request(), &mock_repo, &noop_mirror()).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_register_veterinarian_success() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| Ok(None));
        mock_repo.expect_vet_license_exists().returning(|_| Ok(false));
        mock_repo
            .expect_vet_national_id_exists()
            .returning(|_| Ok(false));
        mock_repo
            .expect_insert_veterinarian()
            .withf(|vet, _| vet.email == "vet@x.com" && vet.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(21));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = register_veterinarian(vet_request(), &mock_repo, &noop_mirror()).await;

        let registered = result.unwrap();
        assert_eq!(registered.user_id, 21);
        assert_eq!(
            registered.user_type,
            models::principal::PrincipalKind::Veterinarian
        );
    }

    #[ntex::test]
    async fn test_login_success_returns_token() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| {
                Ok(Some(models::principal::Principal::Owner(test_owner(
                    11, "a@x.com", "p",
                ))))
            });
        mock_repo
            .expect_purge_expired_session_tokens()
            .times(1)
            .returning(|_| Ok(0));
        mock_repo
            .expect_insert_session_token()
            .withf(|session| session.user_id == 11 && session.revoked_at.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = login(
            LoginRequest {
                email: "a@x.com".into(),
                password: "p".into(),
            },
            &mock_repo,
        )
        .await;

        let outcome = result.unwrap();
        assert_eq!(outcome.user_id, 11);
        assert_eq!(
            outcome.user_type,
            models::principal::PrincipalKind::AnimalOwner
        );
        assert_eq!(outcome.name, "A");
        assert!(!outcome.token.is_empty());
    }

    #[ntex::test]
    async fn test_login_wrong_password_is_auth_error() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| {
                Ok(Some(models::principal::Principal::Owner(test_owner(
                    11, "a@x.com", "p",
                ))))
            });

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = login(
            LoginRequest {
                email: "a@x.com".into(),
                password: "wrong".into(),
            },
            &mock_repo,
        )
        .await;

        assert!(matches!(result, Err(ApiError::Auth)));
    }

    #[ntex::test]
    async fn test_login_unknown_email_is_same_auth_error() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = login(
            LoginRequest {
                email: "nobody@x.com".into(),
                password: "p".into(),
            },
            &mock_repo,
        )
        .await;

        assert!(matches!(result, Err(ApiError::Auth)));
    }

    #[ntex::test]
    async fn test_logout_revokes_then_rejects_unknown_token() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_revoke_session_token()
            .with(eq("tok-1"), always())
            .times(1)
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_revoke_session_token()
            .with(eq("tok-2"), always())
            .times(1)
            .returning(|_, _| Ok(false));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        assert!(logout("tok-1", &mock_repo).await.is_ok());
        assert!(matches!(
            logout("tok-2", &mock_repo).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[ntex::test]
    async fn test_forgot_password_sets_token_with_expiry() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| {
                Ok(Some(models::principal::Principal::Owner(test_owner(
                    11, "a@x.com", "p",
                ))))
            });
        mock_repo
            .expect_set_reset_token()
            .withf(|user_id, user_type, token, expiry| {
                *user_id == 11
                    && *user_type == models::principal::PrincipalKind::AnimalOwner
                    && token.len() == consts::OPAQUE_TOKEN_BYTES * 2
                    && *expiry > Utc::now()
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = forgot_password("a@x.com", &mock_repo, &noop_mirror()).await;

        assert!(result.is_ok());
    }

    #[ntex::test]
    async fn test_forgot_password_unknown_email_still_succeeds() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_email()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = forgot_password("nobody@x.com", &mock_repo, &noop_mirror()).await;

        assert!(result.is_ok());
    }

    #[ntex::test]
    async fn test_reset_password_unknown_token_is_invalid() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_reset_token()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = reset_password(
            ResetPasswordRequest {
                token: "bogus".into(),
                new_password: "new-p".into(),
            },
            &mock_repo,
            &noop_mirror(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[ntex::test]
    async fn test_reset_password_expired_token_keeps_stored_password() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_reset_token()
            .returning(|_| {
                let mut owner = test_owner(11, "a@x.com", "p");
                owner.reset_token = Some("tok".into());
                owner.reset_token_expiry = Some(Utc::now() - Duration::minutes(1));
                Ok(Some(models::principal::Principal::Owner(owner)))
            });
        // No update_password expectation: reaching it would fail the test.

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = reset_password(
            ResetPasswordRequest {
                token: "tok".into(),
                new_password: "new-p".into(),
            },
            &mock_repo,
            &noop_mirror(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::ExpiredToken)));
    }

    #[ntex::test]
    async fn test_reset_password_success_rehashes_and_clears() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_find_principal_by_reset_token()
            .returning(|_| {
                let mut owner = test_owner(11, "a@x.com", "p");
                owner.reset_token = Some("tok".into());
                owner.reset_token_expiry =
                    Some(Utc::now() + Duration::minutes(consts::RESET_TOKEN_TTL_MINUTES));
                Ok(Some(models::principal::Principal::Owner(owner)))
            });
        mock_repo
            .expect_update_password_and_clear_reset_token()
            .withf(|user_id, _, password_hash| {
                *user_id == 11 && password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = reset_password(
            ResetPasswordRequest {
                token: "tok".into(),
                new_password: "new-p".into(),
            },
            &mock_repo,
            &noop_mirror(),
        )
        .await;

        assert!(result.is_ok());
    }

    #[ntex::test]
    async fn test_current_principal_owner_profile() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_animal_owner_by_id()
            .with(eq(11))
            .times(1)
            .returning(|_| Ok(Some(test_owner(11, "a@x.com", "p"))));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = current_principal(
            11,
            models::principal::PrincipalKind::AnimalOwner,
            &mock_repo,
        )
        .await;

        let profile = result.unwrap();
        assert_eq!(profile.id, 11);
        assert_eq!(profile.phone.as_deref(), Some("1"));
        assert!(profile.clinic.is_none());
    }

    #[ntex::test]
    async fn test_current_principal_missing_vet_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_veterinarian_by_id()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = current_principal(
            404,
            models::principal::PrincipalKind::Veterinarian,
            &mock_repo,
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
