//! # Appointment API Module
//!
//! Booking, status transitions and the owner/vet/animal-scoped list views.
//! A booking writes the appointment and its activity-log entry in one
//! transaction; the notification row for the counterpart principal is a
//! separate synchronous best-effort write.

use crate::{consts, models, repo, rest::errors::ApiError};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub animal_id: i64,
    #[serde(default)]
    pub veterinarian_id: i64,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub appointment_type: String,
}

impl BookAppointmentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.owner_id <= 0 {
            return Err(ApiError::missing_field("owner_id"));
        }
        if self.animal_id <= 0 {
            return Err(ApiError::missing_field("animal_id"));
        }
        if self.veterinarian_id <= 0 {
            return Err(ApiError::missing_field("veterinarian_id"));
        }
        if self.date.is_none() {
            return Err(ApiError::missing_field("date"));
        }
        if self.time.trim().is_empty() {
            return Err(ApiError::missing_field("time"));
        }
        if self.appointment_type.trim().is_empty() {
            return Err(ApiError::missing_field("appointment_type"));
        }

        Ok(())
    }
}

async fn notify(notification: models::notification::Notification, repo: &repo::ImplAppRepo) {
    // The triggering write already committed; a lost notification is not
    // worth failing the request over.
    if let Err(err) = repo.insert_notification(&notification).await {
        log::warn!("notification write failed: {err:#}");
    }
}

/// Books a new appointment with status `Pending`.
///
/// # Arguments
/// * `request` - Booking fields (owner, animal, veterinarian, date, time, type)
/// * `repo` - Repository instance for database operations
///
/// # Process
/// 1. Validate all fields are present
/// 2. Verify the animal and the veterinarian exist
/// 3. Insert the appointment and its activity entry in one transaction
/// 4. Write a notification row for the veterinarian
///
/// # Errors
/// `Validation` on missing fields, `NotFound` when the animal or
/// veterinarian is unknown. Nothing is persisted on either failure.
pub async fn book(
    request: BookAppointmentRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    request.validate()?;

    let Some(animal) = repo.get_animal_by_id(request.animal_id).await? else {
        return Err(ApiError::not_found("Animal"));
    };
    if repo
        .get_veterinarian_by_id(request.veterinarian_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Veterinarian"));
    }

    let date = request.date.unwrap_or_default();
    let appointment = models::appointment::Appointment {
        id: 0,
        owner_id: request.owner_id,
        animal_id: request.animal_id,
        veterinarian_id: request.veterinarian_id,
        date,
        time: request.time.clone(),
        appointment_type: request.appointment_type.clone(),
        status: models::appointment::AppointmentStatus::Pending,
        notes: None,
        prescription: None,
        created_at: Utc::now(),
    };
    let activity = models::activity::UserActivity::new(
        request.owner_id,
        models::principal::PrincipalKind::AnimalOwner,
        consts::APPOINTMENT_ACTIVITY,
        format!(
            "Scheduled appointment for animal {} with veterinarian {} on {} at {}",
            request.animal_id, request.veterinarian_id, date, request.time
        ),
    );

    let appointment_id = repo.insert_appointment(&appointment, &activity).await?;

    notify(
        models::notification::Notification::new(
            request.veterinarian_id,
            models::principal::PrincipalKind::Veterinarian,
            "New appointment request".to_string(),
            format!(
                "{} is booked for a {} on {} at {}",
                animal.name, request.appointment_type, date, request.time
            ),
        ),
        repo,
    )
    .await;

    Ok(appointment_id)
}

/// Moves the appointment to `new_status`. Any member of the status set may
/// move to any other member; only membership is validated.
pub async fn update_status(
    appointment_id: i64,
    new_status: &str,
    repo: &repo::ImplAppRepo,
) -> Result<models::appointment::AppointmentStatus, ApiError> {
    let Some(status) = models::appointment::AppointmentStatus::parse(new_status) else {
        return Err(ApiError::validation(format!(
            "Invalid status value: {new_status}"
        )));
    };

    let Some(appointment) = repo.get_appointment_by_id(appointment_id).await? else {
        return Err(ApiError::not_found("Appointment"));
    };

    repo.update_appointment_status(appointment_id, status).await?;

    notify(
        models::notification::Notification::new(
            appointment.owner_id,
            models::principal::PrincipalKind::AnimalOwner,
            "Appointment status updated".to_string(),
            format!(
                "Your appointment on {} at {} is now {}",
                appointment.date, appointment.time, status
            ),
        ),
        repo,
    )
    .await;

    Ok(status)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default)]
    pub status: String,
    pub notes: Option<String>,
    pub prescription: Option<String>,
}

/// Updates status together with the clinical fields.
pub async fn update_details(
    appointment_id: i64,
    request: UpdateAppointmentRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let Some(status) = models::appointment::AppointmentStatus::parse(&request.status) else {
        return Err(ApiError::validation(format!(
            "Invalid status value: {}",
            request.status
        )));
    };

    if repo.get_appointment_by_id(appointment_id).await?.is_none() {
        return Err(ApiError::not_found("Appointment"));
    }

    Ok(repo
        .update_appointment_details(appointment_id, status, request.notes, request.prescription)
        .await?)
}

/// Upcoming-lookahead view for an owner: today or later, soonest first.
pub async fn list_owner_appointments(
    owner_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::AppointmentView>, ApiError> {
    Ok(repo
        .get_owner_appointments_from(owner_id, Utc::now().date_naive())
        .await?)
}

/// Upcoming-lookahead view for a veterinarian: today or later, soonest first.
pub async fn list_vet_appointments(
    veterinarian_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::AppointmentView>, ApiError> {
    Ok(repo
        .get_vet_appointments_from(veterinarian_id, Utc::now().date_naive())
        .await?)
}

/// Full per-animal history, newest first.
pub async fn animal_history(
    animal_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::AppointmentView>, ApiError> {
    if repo.get_animal_by_id(animal_id).await?.is_none() {
        return Err(ApiError::not_found("Animal"));
    }

    Ok(repo.get_animal_appointment_history(animal_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    fn booking_request() -> BookAppointmentRequest {
        BookAppointmentRequest {
            owner_id: 11,
            animal_id: 42,
            veterinarian_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
            time: "10:00".into(),
            appointment_type: "Checkup".into(),
        }
    }

    fn test_animal(id: i64, owner_id: i64) -> models::animal::Animal {
        models::animal::Animal {
            id,
            owner_id,
            name: "Rex".into(),
            breed: "Mixed".into(),
            gender: "M".into(),
            color: "Brown".into(),
            species: "Dog".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_vet(id: i64) -> models::principal::Veterinarian {
        models::principal::Veterinarian {
            id,
            name: "Dr. V".into(),
            email: "vet@x.com".into(),
            password_hash: "h".into(),
            license_number: "LIC-1".into(),
            national_id: "NID-1".into(),
            clinic: "Happy Paws".into(),
            specialization: "Surgery".into(),
            profile_image: None,
            reset_token: None,
            reset_token_expiry: None,
            created_at: Utc::now(),
        }
    }

    fn test_appointment(id: i64) -> models::appointment::Appointment {
        models::appointment::Appointment {
            id,
            owner_id: 11,
            animal_id: 42,
            veterinarian_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: "10:00".into(),
            appointment_type: "Checkup".into(),
            status: models::appointment::AppointmentStatus::Pending,
            notes: None,
            prescription: None,
            created_at: Utc::now(),
        }
    }

    fn view_from(appointment: models::appointment::Appointment) -> models::appointment::AppointmentView {
        models::appointment::AppointmentView {
            id: appointment.id,
            owner_id: appointment.owner_id,
            animal_id: appointment.animal_id,
            veterinarian_id: appointment.veterinarian_id,
            date: appointment.date,
            time: appointment.time,
            appointment_type: appointment.appointment_type,
            status: appointment.status,
            notes: appointment.notes,
            prescription: appointment.prescription,
            animal_name: "Rex".into(),
            veterinarian_name: "Dr. V".into(),
            owner_name: "A".into(),
            created_at: appointment.created_at,
        }
    }

    #[ntex::test]
    async fn test_book_creates_pending_appointment_and_notifies_vet() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_animal_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(Some(test_animal(42, 11))));
        mock_repo
            .expect_get_veterinarian_by_id()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(test_vet(3))));
        mock_repo
            .expect_insert_appointment()
            .withf(|appointment, activity| {
                appointment.status == models::appointment::AppointmentStatus::Pending
                    && appointment.animal_id == 42
                    && activity.activity_type == consts::APPOINTMENT_ACTIVITY
            })
            .times(1)
            .returning(|_, _| Ok(31));
        mock_repo
            .expect_insert_notification()
            .withf(|notification| {
                notification.user_id == 3
                    && notification.user_type == models::principal::PrincipalKind::Veterinarian
                    && !notification.is_read
            })
            .times(1)
            .returning(|_| Ok(1));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = book(booking_request(), &mock_repo).await;

        assert!(result.is_ok_and(|appointment_id| appointment_id == 31));
    }

    #[ntex::test]
    async fn test_book_with_unknown_animal_persists_nothing() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_animal_by_id().returning(|_| Ok(None));
        // No insert_appointment expectation: a write here fails the test.

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = book(booking_request(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_book_with_unknown_vet_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_animal_by_id()
            .returning(|_| Ok(Some(test_animal(42, 11))));
        mock_repo
            .expect_get_veterinarian_by_id()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = book(booking_request(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_book_missing_fields_fail_validation() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let no_time = BookAppointmentRequest {
            time: "".into(),
            ..booking_request()
        };
        assert!(matches!(
            book(no_time, &mock_repo).await,
            Err(ApiError::Validation(_))
        ));

        let no_date = BookAppointmentRequest {
            date: None,
            ..booking_request()
        };
        assert!(matches!(
            book(no_date, &mock_repo).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[ntex::test]
    async fn test_book_survives_notification_write_failure() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_animal_by_id()
            .returning(|_| Ok(Some(test_animal(42, 11))));
        mock_repo
            .expect_get_veterinarian_by_id()
            .returning(|_| Ok(Some(test_vet(3))));
        mock_repo
            .expect_insert_appointment()
            .returning(|_, _| Ok(31));
        mock_repo
            .expect_insert_notification()
            .returning(|_| Err(anyhow::anyhow!("notification table locked")));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = book(booking_request(), &mock_repo).await;

        assert!(result.is_ok_and(|appointment_id| appointment_id == 31));
    }

    #[ntex::test]
    async fn test_update_status_rejects_values_outside_the_set() {
        // No repo expectations: validation must run before any lookup.
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let result = update_status(31, "Cancelled", &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_status_unknown_appointment_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = update_status(404, "Completed", &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_update_status_writes_and_notifies_owner() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .with(eq(31))
            .times(1)
            .returning(|_| Ok(Some(test_appointment(31))));
        mock_repo
            .expect_update_appointment_status()
            .with(eq(31), eq(models::appointment::AppointmentStatus::Completed))
            .times(1)
            .returning(|_, _| Ok(()));
        mock_repo
            .expect_insert_notification()
            .withf(|notification| {
                notification.user_id == 11
                    && notification.user_type == models::principal::PrincipalKind::AnimalOwner
                    && notification.body.contains("Completed")
            })
            .times(1)
            .returning(|_| Ok(1));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = update_status(31, "Completed", &mock_repo).await;

        assert!(
            result.is_ok_and(|status| status == models::appointment::AppointmentStatus::Completed)
        );
    }

    #[ntex::test]
    async fn test_update_details_writes_clinical_fields_together() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .returning(|_| Ok(Some(test_appointment(31))));
        mock_repo
            .expect_update_appointment_details()
            .with(
                eq(31),
                eq(models::appointment::AppointmentStatus::Completed),
                eq(Some("ate grass".to_string())),
                eq(Some("rest".to_string())),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let request = UpdateAppointmentRequest {
            status: "Completed".into(),
            notes: Some("ate grass".into()),
            prescription: Some("rest".into()),
        };

        assert!(update_details(31, request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_owner_list_is_restricted_to_today_or_later() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_owner_appointments_from()
            .withf(|owner_id, from| *owner_id == 11 && *from == Utc::now().date_naive())
            .times(1)
            .returning(|_, _| Ok(vec![view_from(test_appointment(31))]));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = list_owner_appointments(11, &mock_repo).await;

        assert!(result.is_ok_and(|appointments| appointments.len() == 1));
    }

    #[ntex::test]
    async fn test_animal_history_unknown_animal_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_animal_by_id().returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = animal_history(404, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_animal_history_passes_through() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_animal_by_id()
            .returning(|_| Ok(Some(test_animal(42, 11))));
        mock_repo
            .expect_get_animal_appointment_history()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(vec![view_from(test_appointment(31))]));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = animal_history(42, &mock_repo).await;

        assert!(result.is_ok_and(|history| history.len() == 1 && history[0].id == 31));
    }
}
