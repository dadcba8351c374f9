pub const RESET_TOKEN_TTL_MINUTES: i64 = 30;
pub const SESSION_TOKEN_TTL_HOURS: i64 = 12;

/// Raw byte length of opaque tokens (session + password reset) before hex encoding.
pub const OPAQUE_TOKEN_BYTES: usize = 32;

pub const REGISTRATION_ACTIVITY: &str = "registration";
pub const ANIMAL_REGISTRATION_ACTIVITY: &str = "animal_registration";
pub const APPOINTMENT_ACTIVITY: &str = "appointment";
pub const REVIEW_ACTIVITY: &str = "review";
