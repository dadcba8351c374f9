pub const QUERY_GET_OWNER_BY_EMAIL: &str = r#"
SELECT
    id,name,email,phone,location,password_hash,reset_token,reset_token_expiry,created_at
FROM animal_owner
WHERE email=$1;
"#;

pub const QUERY_GET_VET_BY_EMAIL: &str = r#"
SELECT
    id,name,email,password_hash,license_number,national_id,clinic,
    specialization,profile_image,reset_token,reset_token_expiry,created_at
FROM veterinarian
WHERE email=$1;
"#;

pub const QUERY_GET_OWNER_BY_ID: &str = r#"
SELECT
    id,name,email,phone,location,password_hash,reset_token,reset_token_expiry,created_at
FROM animal_owner
WHERE id=$1;
"#;

pub const QUERY_GET_VET_BY_ID: &str = r#"
SELECT
    id,name,email,password_hash,license_number,national_id,clinic,
    specialization,profile_image,reset_token,reset_token_expiry,created_at
FROM veterinarian
WHERE id=$1;
"#;

pub const QUERY_GET_OWNER_BY_RESET_TOKEN: &str = r#"
SELECT
    id,name,email,phone,location,password_hash,reset_token,reset_token_expiry,created_at
FROM animal_owner
WHERE reset_token=$1;
"#;

pub const QUERY_GET_VET_BY_RESET_TOKEN: &str = r#"
SELECT
    id,name,email,password_hash,license_number,national_id,clinic,
    specialization,profile_image,reset_token,reset_token_expiry,created_at
FROM veterinarian
WHERE reset_token=$1;
"#;

pub const QUERY_INSERT_OWNER: &str = r#"
INSERT INTO animal_owner(name,email,phone,location,password_hash,created_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_INSERT_VET: &str = r#"
INSERT INTO veterinarian(
    name,email,password_hash,license_number,national_id,
    clinic,specialization,profile_image,created_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9);
"#;

pub const QUERY_INSERT_ACTIVITY: &str = r#"
INSERT INTO user_activity(user_id,user_type,activity_type,description,created_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_INSERT_SESSION_TOKEN: &str = r#"
INSERT INTO session_token(token,user_id,user_type,expires_at,revoked_at,created_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_INSERT_ANIMAL: &str = r#"
INSERT INTO animal(
    owner_id,name,breed,gender,color,species,date_of_birth,image_url,
    created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10);
"#;

pub const QUERY_GET_ANIMAL_BY_ID: &str = r#"
SELECT
    id,owner_id,name,breed,gender,color,species,date_of_birth,image_url,created_at,updated_at
FROM animal
WHERE id=$1;
"#;

pub const QUERY_GET_ANIMALS_BY_OWNER: &str = r#"
SELECT
    id,owner_id,name,breed,gender,color,species,date_of_birth,image_url,created_at,updated_at
FROM animal
WHERE owner_id=$1
ORDER BY created_at DESC;
"#;

pub const QUERY_UPDATE_ANIMAL: &str = r#"
UPDATE animal SET
    name=$2,breed=$3,gender=$4,color=$5,species=$6,date_of_birth=$7,image_url=$8,updated_at=$9
WHERE id=$1;
"#;

pub const QUERY_INSERT_APPOINTMENT: &str = r#"
INSERT INTO appointment(
    owner_id,animal_id,veterinarian_id,date,time,appointment_type,
    status,notes,prescription,created_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10);
"#;

pub const QUERY_GET_APPOINTMENT_BY_ID: &str = r#"
SELECT
    id,owner_id,animal_id,veterinarian_id,date,time,appointment_type,
    status,notes,prescription,created_at
FROM appointment
WHERE id=$1;
"#;

pub const QUERY_GET_OWNER_APPOINTMENTS_FROM: &str = r#"
SELECT
    ap.id, ap.owner_id, ap.animal_id, ap.veterinarian_id,
    ap.date, ap.time, ap.appointment_type, ap.status,
    ap.notes, ap.prescription, ap.created_at,
    an.name AS animal_name,
    vt.name AS veterinarian_name,
    ow.name AS owner_name
FROM appointment AS ap
JOIN animal AS an ON an.id = ap.animal_id
JOIN veterinarian AS vt ON vt.id = ap.veterinarian_id
JOIN animal_owner AS ow ON ow.id = ap.owner_id
WHERE ap.owner_id = $1 AND ap.date >= $2
ORDER BY ap.date ASC, ap.time ASC;
"#;

pub const QUERY_GET_VET_APPOINTMENTS_FROM: &str = r#"
SELECT
    ap.id, ap.owner_id, ap.animal_id, ap.veterinarian_id,
    ap.date, ap.time, ap.appointment_type, ap.status,
    ap.notes, ap.prescription, ap.created_at,
    an.name AS animal_name,
    vt.name AS veterinarian_name,
    ow.name AS owner_name
FROM appointment AS ap
JOIN animal AS an ON an.id = ap.animal_id
JOIN veterinarian AS vt ON vt.id = ap.veterinarian_id
JOIN animal_owner AS ow ON ow.id = ap.owner_id
WHERE ap.veterinarian_id = $1 AND ap.date >= $2
ORDER BY ap.date ASC, ap.time ASC;
"#;

pub const QUERY_GET_ANIMAL_APPOINTMENT_HISTORY: &str = r#"
SELECT
    ap.id, ap.owner_id, ap.animal_id, ap.veterinarian_id,
    ap.date, ap.time, ap.appointment_type, ap.status,
    ap.notes, ap.prescription, ap.created_at,
    an.name AS animal_name,
    vt.name AS veterinarian_name,
    ow.name AS owner_name
FROM appointment AS ap
JOIN animal AS an ON an.id = ap.animal_id
JOIN veterinarian AS vt ON vt.id = ap.veterinarian_id
JOIN animal_owner AS ow ON ow.id = ap.owner_id
WHERE ap.animal_id = $1
ORDER BY ap.date DESC, ap.time DESC;
"#;

pub const QUERY_INSERT_REVIEW: &str = r#"
INSERT INTO review(veterinarian_id,owner_id,review_text,created_at)
VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_VET_REVIEWS: &str = r#"
SELECT
    rv.id, rv.veterinarian_id, rv.owner_id, rv.review_text, rv.created_at,
    ow.name AS owner_name
FROM review AS rv
LEFT JOIN animal_owner AS ow ON ow.id = rv.owner_id
WHERE rv.veterinarian_id = $1
ORDER BY rv.created_at DESC;
"#;

pub const QUERY_GET_OWNER_FAVORITES: &str = r#"
SELECT
    fv.veterinarian_id, fv.created_at,
    vt.name, vt.clinic, vt.specialization, vt.profile_image
FROM favorite_veterinarian AS fv
JOIN veterinarian AS vt ON vt.id = fv.veterinarian_id
WHERE fv.owner_id = $1
ORDER BY fv.created_at DESC;
"#;

pub const QUERY_INSERT_NOTIFICATION: &str = r#"
INSERT INTO notification(user_id,user_type,title,body,is_read,created_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_GET_NOTIFICATIONS: &str = r#"
SELECT
    id,user_id,user_type,title,body,is_read,created_at
FROM notification
WHERE user_id=$1 AND user_type=$2
ORDER BY created_at DESC;
"#;

pub const QUERY_GET_USER_ACTIVITY: &str = r#"
SELECT
    id,user_id,user_type,activity_type,description,created_at
FROM user_activity
WHERE user_id=$1 AND user_type=$2
ORDER BY created_at DESC;
"#;

pub const QUERY_GET_ALL_VETS: &str = r#"
SELECT
    id,name,email,clinic,specialization,profile_image
FROM veterinarian
ORDER BY name ASC;
"#;

pub const QUERY_SEARCH_VETS: &str = r#"
SELECT
    id,name,email,clinic,specialization,profile_image
FROM veterinarian
WHERE
    ($1='' OR name LIKE '%'||$1||'%') AND
    ($2='' OR specialization LIKE '%'||$2||'%')
ORDER BY name ASC;
"#;
