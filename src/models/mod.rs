//! Data models for the barbershop booking system

pub mod appointment;
pub mod barber;
pub mod barbershop;
pub mod client;
pub mod shop_service;

// Re-export commonly used types
pub use appointment::{Appointment, CreateAppointment, NewAppointment};
pub use barber::Barber;
pub use barbershop::Barbershop;
pub use client::{Client, ClientClaims};
pub use shop_service::ShopService;
