//! Table definitions applied at startup. Statements are idempotent so the
//! pool can be pointed at an existing database.

use sqlx::SqlitePool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS animal_owner (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL UNIQUE,
    location TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    reset_token TEXT,
    reset_token_expiry TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS veterinarian (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    license_number TEXT NOT NULL UNIQUE,
    national_id TEXT NOT NULL UNIQUE,
    clinic TEXT NOT NULL,
    specialization TEXT NOT NULL,
    profile_image TEXT,
    reset_token TEXT,
    reset_token_expiry TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS animal (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL REFERENCES animal_owner(id),
    name TEXT NOT NULL,
    breed TEXT NOT NULL,
    gender TEXT NOT NULL,
    color TEXT NOT NULL,
    species TEXT NOT NULL,
    date_of_birth TEXT NOT NULL,
    image_url TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS appointment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL REFERENCES animal_owner(id),
    animal_id INTEGER NOT NULL REFERENCES animal(id),
    veterinarian_id INTEGER NOT NULL REFERENCES veterinarian(id),
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    appointment_type TEXT NOT NULL,
    status TEXT NOT NULL,
    notes TEXT,
    prescription TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS review (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    veterinarian_id INTEGER NOT NULL REFERENCES veterinarian(id),
    owner_id INTEGER NOT NULL REFERENCES animal_owner(id),
    review_text TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS favorite_veterinarian (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL REFERENCES animal_owner(id),
    veterinarian_id INTEGER NOT NULL REFERENCES veterinarian(id),
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notification (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    user_type TEXT NOT NULL,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    is_read INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_activity (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    user_type TEXT NOT NULL,
    activity_type TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS session_token (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL,
    user_type TEXT NOT NULL,
    expires_at TEXT NOT NULL,
    revoked_at TEXT,
    created_at TEXT NOT NULL
);
"#;

pub async fn apply(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
