use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The fixed status set an appointment can be in. Any status may move to
/// any other status; only membership in this set is validated.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[display("Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[display("Upcoming")]
    #[serde(rename = "Upcoming")]
    Upcoming,
    #[display("Completed")]
    #[serde(rename = "Completed")]
    Completed,
    #[display("Missed")]
    #[serde(rename = "Missed")]
    Missed,
}

impl AppointmentStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Pending" => Some(AppointmentStatus::Pending),
            "Upcoming" => Some(AppointmentStatus::Upcoming),
            "Completed" => Some(AppointmentStatus::Completed),
            "Missed" => Some(AppointmentStatus::Missed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub owner_id: i64,
    pub animal_id: i64,
    pub veterinarian_id: i64,
    pub date: NaiveDate,
    /// Free-form, e.g. "10:00" or "10:00 AM".
    pub time: String,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub prescription: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Appointment joined with the display names list views need.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub id: i64,
    pub owner_id: i64,
    pub animal_id: i64,
    pub veterinarian_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub prescription: Option<String>,
    pub animal_name: String,
    pub veterinarian_name: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_accepts_the_fixed_set_only() {
        assert_eq!(
            AppointmentStatus::parse("Pending"),
            Some(AppointmentStatus::Pending)
        );
        assert_eq!(
            AppointmentStatus::parse("Upcoming"),
            Some(AppointmentStatus::Upcoming)
        );
        assert_eq!(
            AppointmentStatus::parse("Completed"),
            Some(AppointmentStatus::Completed)
        );
        assert_eq!(
            AppointmentStatus::parse("Missed"),
            Some(AppointmentStatus::Missed)
        );

        assert_eq!(AppointmentStatus::parse("pending"), None);
        assert_eq!(AppointmentStatus::parse("Cancelled"), None);
        assert_eq!(AppointmentStatus::parse(""), None);
    }

    #[test]
    fn test_status_display_roundtrips_through_parse() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Upcoming,
            AppointmentStatus::Completed,
            AppointmentStatus::Missed,
        ] {
            assert_eq!(AppointmentStatus::parse(&status.to_string()), Some(status));
        }
    }
}
