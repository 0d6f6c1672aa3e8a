//! Barbershop Booking System
//!
//! A Rust implementation of the barbershop booking backend, providing a REST
//! JSON API for browsing barbershops and barbers, deriving bookable dates and
//! time slots from weekly availability, and confirming appointments.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
