pub mod activity;
pub mod animal;
pub mod appointment;
pub mod favorite;
pub mod identity;
pub mod notification;
pub mod review;
pub mod vet;
