//! Business logic services

pub mod auth;
pub mod booking;
pub mod catalog;

use crate::{
    config::{AuthConfig, BookingConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub booking: booking::BookingService,
    /// Kept for infrastructure probes (readiness check)
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, booking_config: BookingConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            booking: booking::BookingService::new(repository.clone(), booking_config),
            repository,
        }
    }
}
