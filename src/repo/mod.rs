pub mod schema;
pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo {
    // Principals. The `activity` row is committed in the same transaction
    // as the principal insert.
    async fn insert_animal_owner(
        &self,
        owner: &models::principal::AnimalOwner,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64>;

    async fn insert_veterinarian(
        &self,
        vet: &models::principal::Veterinarian,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64>;

    async fn find_principal_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<models::principal::Principal>>;

    async fn find_principal_by_reset_token(
        &self,
        token: &str,
    ) -> anyhow::Result<Option<models::principal::Principal>>;

    async fn get_animal_owner_by_id(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Option<models::principal::AnimalOwner>>;

    async fn get_veterinarian_by_id(
        &self,
        veterinarian_id: i64,
    ) -> anyhow::Result<Option<models::principal::Veterinarian>>;

    async fn owner_phone_exists(&self, phone: &str) -> anyhow::Result<bool>;

    async fn vet_license_exists(&self, license_number: &str) -> anyhow::Result<bool>;

    async fn vet_national_id_exists(&self, national_id: &str) -> anyhow::Result<bool>;

    async fn set_reset_token(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
        token: &str,
        expiry: DateTime<Utc>,
    ) -> anyhow::Result<()>;

    async fn update_password_and_clear_reset_token(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
        password_hash: &str,
    ) -> anyhow::Result<()>;

    // Session tokens
    async fn insert_session_token(
        &self,
        session: &models::session::SessionToken,
    ) -> anyhow::Result<()>;

    /// Returns false when the token is unknown or already revoked.
    async fn revoke_session_token(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> anyhow::Result<bool>;

    async fn purge_expired_session_tokens(&self, now: DateTime<Utc>) -> anyhow::Result<u64>;

    // Animals
    async fn insert_animal(
        &self,
        animal: &models::animal::Animal,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64>;

    async fn get_animal_by_id(
        &self,
        animal_id: i64,
    ) -> anyhow::Result<Option<models::animal::Animal>>;

    async fn get_animals_by_owner(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Vec<models::animal::Animal>>;

    async fn update_animal(&self, animal: &models::animal::Animal) -> anyhow::Result<()>;

    async fn delete_animal(&self, animal_id: i64) -> anyhow::Result<()>;

    // Appointments
    async fn insert_appointment(
        &self,
        appointment: &models::appointment::Appointment,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64>;

    async fn get_appointment_by_id(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>>;

    async fn update_appointment_status(
        &self,
        appointment_id: i64,
        status: models::appointment::AppointmentStatus,
    ) -> anyhow::Result<()>;

    async fn update_appointment_details(
        &self,
        appointment_id: i64,
        status: models::appointment::AppointmentStatus,
        notes: Option<String>,
        prescription: Option<String>,
    ) -> anyhow::Result<()>;

    async fn get_owner_appointments_from(
        &self,
        owner_id: i64,
        from: NaiveDate,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>>;

    async fn get_vet_appointments_from(
        &self,
        veterinarian_id: i64,
        from: NaiveDate,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>>;

    async fn get_animal_appointment_history(
        &self,
        animal_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>>;

    // Reviews
    async fn insert_review(
        &self,
        review: &models::review::Review,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64>;

    async fn get_vet_reviews(
        &self,
        veterinarian_id: i64,
    ) -> anyhow::Result<Vec<models::review::ReviewView>>;

    async fn count_vet_reviews(&self, veterinarian_id: i64) -> anyhow::Result<i64>;

    // Favorites
    async fn favorite_exists(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<bool>;

    async fn insert_favorite(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<i64>;

    /// Returns false when the pair was not present.
    async fn delete_favorite(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<bool>;

    async fn get_owner_favorites(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Vec<models::favorite::FavoriteVetView>>;

    // Notifications
    async fn insert_notification(
        &self,
        notification: &models::notification::Notification,
    ) -> anyhow::Result<i64>;

    async fn get_notifications(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
    ) -> anyhow::Result<Vec<models::notification::Notification>>;

    /// Returns false when the notification is unknown.
    async fn mark_notification_read(&self, notification_id: i64) -> anyhow::Result<bool>;

    // Activity log
    async fn get_user_activity(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
    ) -> anyhow::Result<Vec<models::activity::UserActivity>>;

    // Veterinarian directory
    async fn get_all_veterinarians(
        &self,
    ) -> anyhow::Result<Vec<models::principal::VetDirectoryEntry>>;

    async fn search_veterinarians(
        &self,
        name_query: &str,
        specialization: &str,
    ) -> anyhow::Result<Vec<models::principal::VetDirectoryEntry>>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
