use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

fn decode_kind(raw: &str) -> sqlx::Result<models::principal::PrincipalKind> {
    serde_json::from_str::<models::principal::PrincipalKind>(&format!("\"{raw}\""))
        .map_err(|err| sqlx::Error::Decode(err.into()))
}

fn decode_status(raw: &str) -> sqlx::Result<models::appointment::AppointmentStatus> {
    serde_json::from_str::<models::appointment::AppointmentStatus>(&format!("\"{raw}\""))
        .map_err(|err| sqlx::Error::Decode(err.into()))
}

impl FromRow<'_, SqliteRow> for models::principal::AnimalOwner {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            location: row.try_get("location")?,
            password_hash: row.try_get("password_hash")?,
            reset_token: row.try_get("reset_token")?,
            reset_token_expiry: row.try_get("reset_token_expiry")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::principal::Veterinarian {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            license_number: row.try_get("license_number")?,
            national_id: row.try_get("national_id")?,
            clinic: row.try_get("clinic")?,
            specialization: row.try_get("specialization")?,
            profile_image: row.try_get("profile_image")?,
            reset_token: row.try_get("reset_token")?,
            reset_token_expiry: row.try_get("reset_token_expiry")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::principal::VetDirectoryEntry {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            clinic: row.try_get("clinic")?,
            specialization: row.try_get("specialization")?,
            profile_image: row.try_get("profile_image")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::animal::Animal {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            breed: row.try_get("breed")?,
            gender: row.try_get("gender")?,
            color: row.try_get("color")?,
            species: row.try_get("species")?,
            date_of_birth: row.try_get("date_of_birth")?,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::Appointment {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            animal_id: row.try_get("animal_id")?,
            veterinarian_id: row.try_get("veterinarian_id")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            appointment_type: row.try_get("appointment_type")?,
            status: decode_status(row.try_get("status")?)?,
            notes: row.try_get("notes")?,
            prescription: row.try_get("prescription")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::AppointmentView {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            animal_id: row.try_get("animal_id")?,
            veterinarian_id: row.try_get("veterinarian_id")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            appointment_type: row.try_get("appointment_type")?,
            status: decode_status(row.try_get("status")?)?,
            notes: row.try_get("notes")?,
            prescription: row.try_get("prescription")?,
            animal_name: row.try_get("animal_name")?,
            veterinarian_name: row.try_get("veterinarian_name")?,
            owner_name: row.try_get("owner_name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::notification::Notification {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            user_type: decode_kind(row.try_get("user_type")?)?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            is_read: row.try_get("is_read")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::activity::UserActivity {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            user_type: decode_kind(row.try_get("user_type")?)?,
            activity_type: row.try_get("activity_type")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn insert_animal_owner(
        &self,
        owner: &models::principal::AnimalOwner,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let owner_id = sqlx::query(sqlite_queries::QUERY_INSERT_OWNER)
            .bind(&owner.name)
            .bind(&owner.email)
            .bind(&owner.phone)
            .bind(&owner.location)
            .bind(&owner.password_hash)
            .bind(owner.created_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_INSERT_ACTIVITY)
            .bind(owner_id)
            .bind(activity.user_type.to_string())
            .bind(&activity.activity_type)
            .bind(&activity.description)
            .bind(activity.created_at)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(owner_id)
    }

    async fn insert_veterinarian(
        &self,
        vet: &models::principal::Veterinarian,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let vet_id = sqlx::query(sqlite_queries::QUERY_INSERT_VET)
            .bind(&vet.name)
            .bind(&vet.email)
            .bind(&vet.password_hash)
            .bind(&vet.license_number)
            .bind(&vet.national_id)
            .bind(&vet.clinic)
            .bind(&vet.specialization)
            .bind(&vet.profile_image)
            .bind(vet.created_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_INSERT_ACTIVITY)
            .bind(vet_id)
            .bind(activity.user_type.to_string())
            .bind(&activity.activity_type)
            .bind(&activity.description)
            .bind(activity.created_at)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(vet_id)
    }

    async fn find_principal_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<models::principal::Principal>> {
        if let Some(owner) = sqlx::query_as::<_, models::principal::AnimalOwner>(
            sqlite_queries::QUERY_GET_OWNER_BY_EMAIL,
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?
        {
            return Ok(Some(models::principal::Principal::Owner(owner)));
        }

        Ok(sqlx::query_as::<_, models::principal::Veterinarian>(
            sqlite_queries::QUERY_GET_VET_BY_EMAIL,
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?
        .map(models::principal::Principal::Vet))
    }

    async fn find_principal_by_reset_token(
        &self,
        token: &str,
    ) -> anyhow::Result<Option<models::principal::Principal>> {
        if let Some(owner) = sqlx::query_as::<_, models::principal::AnimalOwner>(
            sqlite_queries::QUERY_GET_OWNER_BY_RESET_TOKEN,
        )
        .bind(token)
        .fetch_optional(&self.db_pool)
        .await?
        {
            return Ok(Some(models::principal::Principal::Owner(owner)));
        }

        Ok(sqlx::query_as::<_, models::principal::Veterinarian>(
            sqlite_queries::QUERY_GET_VET_BY_RESET_TOKEN,
        )
        .bind(token)
        .fetch_optional(&self.db_pool)
        .await?
        .map(models::principal::Principal::Vet))
    }

    async fn get_animal_owner_by_id(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Option<models::principal::AnimalOwner>> {
        Ok(sqlx::query_as::<_, models::principal::AnimalOwner>(
            sqlite_queries::QUERY_GET_OWNER_BY_ID,
        )
        .bind(owner_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_veterinarian_by_id(
        &self,
        veterinarian_id: i64,
    ) -> anyhow::Result<Option<models::principal::Veterinarian>> {
        Ok(sqlx::query_as::<_, models::principal::Veterinarian>(
            sqlite_queries::QUERY_GET_VET_BY_ID,
        )
        .bind(veterinarian_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn owner_phone_exists(&self, phone: &str) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM animal_owner WHERE phone=$1);")
                .bind(phone)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn vet_license_exists(&self, license_number: &str) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM veterinarian WHERE license_number=$1);")
                .bind(license_number)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn vet_national_id_exists(&self, national_id: &str) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM veterinarian WHERE national_id=$1);")
                .bind(national_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn set_reset_token(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
        token: &str,
        expiry: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let query = match user_type {
            models::principal::PrincipalKind::AnimalOwner => {
                "UPDATE animal_owner SET reset_token=$2, reset_token_expiry=$3 WHERE id=$1;"
            }
            models::principal::PrincipalKind::Veterinarian => {
                "UPDATE veterinarian SET reset_token=$2, reset_token_expiry=$3 WHERE id=$1;"
            }
        };

        Ok(sqlx::query(query)
            .bind(user_id)
            .bind(token)
            .bind(expiry)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_password_and_clear_reset_token(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
        password_hash: &str,
    ) -> anyhow::Result<()> {
        let query = match user_type {
            models::principal::PrincipalKind::AnimalOwner => {
                "UPDATE animal_owner SET password_hash=$2, reset_token=NULL, reset_token_expiry=NULL WHERE id=$1;"
            }
            models::principal::PrincipalKind::Veterinarian => {
                "UPDATE veterinarian SET password_hash=$2, reset_token=NULL, reset_token_expiry=NULL WHERE id=$1;"
            }
        };

        Ok(sqlx::query(query)
            .bind(user_id)
            .bind(password_hash)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn insert_session_token(
        &self,
        session: &models::session::SessionToken,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_SESSION_TOKEN)
            .bind(&session.token)
            .bind(session.user_id)
            .bind(session.user_type.to_string())
            .bind(session.expires_at)
            .bind(session.revoked_at)
            .bind(session.created_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn revoke_session_token(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let result =
            sqlx::query("UPDATE session_token SET revoked_at=$2 WHERE token=$1 AND revoked_at IS NULL;")
                .bind(token)
                .bind(revoked_at)
                .execute(&self.db_pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired_session_tokens(&self, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM session_token WHERE expires_at < $1;")
            .bind(now)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_animal(
        &self,
        animal: &models::animal::Animal,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let animal_id = sqlx::query(sqlite_queries::QUERY_INSERT_ANIMAL)
            .bind(animal.owner_id)
            .bind(&animal.name)
            .bind(&animal.breed)
            .bind(&animal.gender)
            .bind(&animal.color)
            .bind(&animal.species)
            .bind(animal.date_of_birth)
            .bind(&animal.image_url)
            .bind(animal.created_at)
            .bind(animal.updated_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_INSERT_ACTIVITY)
            .bind(activity.user_id)
            .bind(activity.user_type.to_string())
            .bind(&activity.activity_type)
            .bind(&activity.description)
            .bind(activity.created_at)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(animal_id)
    }

    async fn get_animal_by_id(
        &self,
        animal_id: i64,
    ) -> anyhow::Result<Option<models::animal::Animal>> {
        Ok(
            sqlx::query_as::<_, models::animal::Animal>(sqlite_queries::QUERY_GET_ANIMAL_BY_ID)
                .bind(animal_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_animals_by_owner(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Vec<models::animal::Animal>> {
        Ok(
            sqlx::query_as::<_, models::animal::Animal>(sqlite_queries::QUERY_GET_ANIMALS_BY_OWNER)
                .bind(owner_id)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn update_animal(&self, animal: &models::animal::Animal) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_ANIMAL)
            .bind(animal.id)
            .bind(&animal.name)
            .bind(&animal.breed)
            .bind(&animal.gender)
            .bind(&animal.color)
            .bind(&animal.species)
            .bind(animal.date_of_birth)
            .bind(&animal.image_url)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn delete_animal(&self, animal_id: i64) -> anyhow::Result<()> {
        Ok(sqlx::query("DELETE FROM animal WHERE id=$1;")
            .bind(animal_id)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn insert_appointment(
        &self,
        appointment: &models::appointment::Appointment,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let appointment_id = sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT)
            .bind(appointment.owner_id)
            .bind(appointment.animal_id)
            .bind(appointment.veterinarian_id)
            .bind(appointment.date)
            .bind(&appointment.time)
            .bind(&appointment.appointment_type)
            .bind(appointment.status.to_string())
            .bind(&appointment.notes)
            .bind(&appointment.prescription)
            .bind(appointment.created_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_INSERT_ACTIVITY)
            .bind(activity.user_id)
            .bind(activity.user_type.to_string())
            .bind(&activity.activity_type)
            .bind(&activity.description)
            .bind(activity.created_at)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(appointment_id)
    }

    async fn get_appointment_by_id(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_APPOINTMENT_BY_ID,
        )
        .bind(appointment_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn update_appointment_status(
        &self,
        appointment_id: i64,
        status: models::appointment::AppointmentStatus,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query("UPDATE appointment SET status=$2 WHERE id=$1;")
            .bind(appointment_id)
            .bind(status.to_string())
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_appointment_details(
        &self,
        appointment_id: i64,
        status: models::appointment::AppointmentStatus,
        notes: Option<String>,
        prescription: Option<String>,
    ) -> anyhow::Result<()> {
        Ok(
            sqlx::query(
                "UPDATE appointment SET status=$2, notes=$3, prescription=$4 WHERE id=$1;",
            )
            .bind(appointment_id)
            .bind(status.to_string())
            .bind(notes)
            .bind(prescription)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?,
        )
    }

    async fn get_owner_appointments_from(
        &self,
        owner_id: i64,
        from: NaiveDate,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>> {
        Ok(sqlx::query_as::<_, models::appointment::AppointmentView>(
            sqlite_queries::QUERY_GET_OWNER_APPOINTMENTS_FROM,
        )
        .bind(owner_id)
        .bind(from)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_vet_appointments_from(
        &self,
        veterinarian_id: i64,
        from: NaiveDate,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>> {
        Ok(sqlx::query_as::<_, models::appointment::AppointmentView>(
            sqlite_queries::QUERY_GET_VET_APPOINTMENTS_FROM,
        )
        .bind(veterinarian_id)
        .bind(from)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_animal_appointment_history(
        &self,
        animal_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentView>> {
        Ok(sqlx::query_as::<_, models::appointment::AppointmentView>(
            sqlite_queries::QUERY_GET_ANIMAL_APPOINTMENT_HISTORY,
        )
        .bind(animal_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn insert_review(
        &self,
        review: &models::review::Review,
        activity: &models::activity::UserActivity,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let review_id = sqlx::query(sqlite_queries::QUERY_INSERT_REVIEW)
            .bind(review.veterinarian_id)
            .bind(review.owner_id)
            .bind(&review.review_text)
            .bind(review.created_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_INSERT_ACTIVITY)
            .bind(activity.user_id)
            .bind(activity.user_type.to_string())
            .bind(&activity.activity_type)
            .bind(&activity.description)
            .bind(activity.created_at)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(review_id)
    }

    async fn get_vet_reviews(
        &self,
        veterinarian_id: i64,
    ) -> anyhow::Result<Vec<models::review::ReviewView>> {
        Ok(sqlx::query(sqlite_queries::QUERY_GET_VET_REVIEWS)
            .bind(veterinarian_id)
            .map(|row: SqliteRow| models::review::ReviewView {
                id: row.try_get("id").unwrap_or(-1),
                veterinarian_id: row.try_get("veterinarian_id").unwrap_or(-1),
                owner_id: row.try_get("owner_id").unwrap_or(-1),
                owner_name: row
                    .try_get::<Option<String>, _>("owner_name")
                    .unwrap_or_default()
                    .unwrap_or_else(|| "Unknown".to_string()),
                review_text: row.try_get("review_text").unwrap_or_default(),
                created_at: row.try_get("created_at").unwrap_or_default(),
            })
            .fetch_all(&self.db_pool)
            .await?)
    }

    async fn count_vet_reviews(&self, veterinarian_id: i64) -> anyhow::Result<i64> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM review WHERE veterinarian_id=$1;")
                .bind(veterinarian_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn favorite_exists(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favorite_veterinarian WHERE owner_id=$1 AND veterinarian_id=$2);",
        )
        .bind(owner_id)
        .bind(veterinarian_id)
        .fetch_one(&self.db_pool)
        .await?)
    }

    async fn insert_favorite(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<i64> {
        Ok(sqlx::query(
            "INSERT INTO favorite_veterinarian(owner_id,veterinarian_id,created_at) VALUES($1,$2,$3);",
        )
        .bind(owner_id)
        .bind(veterinarian_id)
        .bind(Utc::now())
        .execute(&self.db_pool)
        .await?
        .last_insert_rowid())
    }

    async fn delete_favorite(&self, owner_id: i64, veterinarian_id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "DELETE FROM favorite_veterinarian WHERE owner_id=$1 AND veterinarian_id=$2;",
        )
        .bind(owner_id)
        .bind(veterinarian_id)
        .execute(&self.db_pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_owner_favorites(
        &self,
        owner_id: i64,
    ) -> anyhow::Result<Vec<models::favorite::FavoriteVetView>> {
        Ok(sqlx::query(sqlite_queries::QUERY_GET_OWNER_FAVORITES)
            .bind(owner_id)
            .map(|row: SqliteRow| models::favorite::FavoriteVetView {
                veterinarian_id: row.try_get("veterinarian_id").unwrap_or(-1),
                name: row.try_get("name").unwrap_or_default(),
                clinic: row.try_get("clinic").unwrap_or_default(),
                specialization: row.try_get("specialization").unwrap_or_default(),
                profile_image: row.try_get("profile_image").unwrap_or_default(),
                created_at: row.try_get("created_at").unwrap_or_default(),
            })
            .fetch_all(&self.db_pool)
            .await?)
    }

    async fn insert_notification(
        &self,
        notification: &models::notification::Notification,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_NOTIFICATION)
            .bind(notification.user_id)
            .bind(notification.user_type.to_string())
            .bind(&notification.title)
            .bind(&notification.body)
            .bind(notification.is_read)
            .bind(notification.created_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn get_notifications(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
    ) -> anyhow::Result<Vec<models::notification::Notification>> {
        Ok(sqlx::query_as::<_, models::notification::Notification>(
            sqlite_queries::QUERY_GET_NOTIFICATIONS,
        )
        .bind(user_id)
        .bind(user_type.to_string())
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn mark_notification_read(&self, notification_id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE notification SET is_read=1 WHERE id=$1;")
            .bind(notification_id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_user_activity(
        &self,
        user_id: i64,
        user_type: models::principal::PrincipalKind,
    ) -> anyhow::Result<Vec<models::activity::UserActivity>> {
        Ok(sqlx::query_as::<_, models::activity::UserActivity>(
            sqlite_queries::QUERY_GET_USER_ACTIVITY,
        )
        .bind(user_id)
        .bind(user_type.to_string())
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_all_veterinarians(
        &self,
    ) -> anyhow::Result<Vec<models::principal::VetDirectoryEntry>> {
        Ok(sqlx::query_as::<_, models::principal::VetDirectoryEntry>(
            sqlite_queries::QUERY_GET_ALL_VETS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn search_veterinarians(
        &self,
        name_query: &str,
        specialization: &str,
    ) -> anyhow::Result<Vec<models::principal::VetDirectoryEntry>> {
        Ok(sqlx::query_as::<_, models::principal::VetDirectoryEntry>(
            sqlite_queries::QUERY_SEARCH_VETS,
        )
        .bind(name_query)
        .bind(specialization)
        .fetch_all(&self.db_pool)
        .await?)
    }
}
