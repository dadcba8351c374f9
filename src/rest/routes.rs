//! Route configuration, grouped by domain.

use super::{activity, animal, appointment, favorite, identity, notification, review, vet};
use ntex::web;

/// Registration, login/logout, profile lookup and password reset.
pub fn identity(cfg: &mut web::ServiceConfig) {
    cfg.service((
        identity::register_animal_owner,
        identity::register_veterinarian,
        identity::login,
        identity::logout,
        identity::get_current_user,
        identity::forgot_password,
        identity::reset_password,
    ));
}

/// Pet-profile CRUD scoped to an owner.
pub fn animals(cfg: &mut web::ServiceConfig) {
    cfg.service((
        animal::register_animal,
        animal::get_animals,
        animal::update_animal,
        animal::delete_animal,
    ));
}

/// Booking, status updates and the scoped list views.
pub fn appointments(cfg: &mut web::ServiceConfig) {
    cfg.service((
        appointment::book_appointment,
        appointment::get_appointments,
        appointment::get_vet_appointments,
        appointment::update_appointment_status,
        appointment::update_appointment,
        appointment::get_animal_appointment_history,
    ));
}

pub fn reviews(cfg: &mut web::ServiceConfig) {
    cfg.service((review::submit_review, review::get_reviews));
}

pub fn favorites(cfg: &mut web::ServiceConfig) {
    cfg.service((
        favorite::add_favorite,
        favorite::remove_favorite,
        favorite::get_favorites,
    ));
}

pub fn notifications(cfg: &mut web::ServiceConfig) {
    cfg.service((
        notification::create_notification,
        notification::get_notifications,
        notification::mark_notification_read,
        activity::get_user_activity,
    ));
}

/// Public veterinarian directory.
pub fn vets(cfg: &mut web::ServiceConfig) {
    cfg.service((
        vet::get_veterinarians,
        vet::search_veterinarians,
        vet::get_vet_profile,
    ));
}
