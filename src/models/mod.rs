pub mod activity;
pub mod animal;
pub mod appointment;
pub mod favorite;
pub mod notification;
pub mod principal;
pub mod review;
pub mod session;
