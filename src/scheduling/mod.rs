//! Availability-to-timeslot derivation engine.
//!
//! Pure, side-effect-free scheduling logic: expanding a barber's weekly
//! availability over a scan window, generating discrete bookable time slots
//! from a working-hours range, and assembling a validated appointment at
//! confirmation time. Everything here is deterministic: "now" is always an
//! explicit argument, never read from the system clock.

pub mod availability;
pub mod booking;
pub mod slots;

pub use availability::WeeklyAvailability;
pub use booking::{confirm_appointment, BookingError};
pub use slots::{generate_slots, try_generate_slots, RangeParseError};
