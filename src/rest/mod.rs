pub mod activity;
pub mod animal;
pub mod appointment;
pub mod errors;
pub mod favorite;
pub mod identity;
pub mod notification;
pub mod review;
pub mod routes;
pub mod vet;

use crate::{repo, services};

pub struct AppState {
    pub repo: repo::ImplAppRepo,
    pub identity_mirror: services::ImplIdentityMirror,
}
