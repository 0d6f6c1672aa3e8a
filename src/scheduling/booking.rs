//! Appointment confirmation: precondition checks and instant assembly

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{appointment::NewAppointment, Barber},
};

/// A confirmation precondition failed. Checked in order; first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid time")]
    InvalidTime,
    #[error("not logged in")]
    NotLoggedIn,
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidDate | BookingError::InvalidTime => {
                AppError::Validation(err.to_string())
            }
            BookingError::NotLoggedIn => AppError::Authentication(err.to_string()),
        }
    }
}

/// Validate a booking selection and assemble the appointment to persist.
///
/// The selected `"HH:MM"` slot is combined with the selected date into a
/// single UTC instant with seconds zeroed. `now` becomes the creation
/// timestamp; it is injected so the operation stays deterministic. The
/// returned value is ready for the persistence layer; nothing is written
/// here.
pub fn confirm_appointment(
    barber: &Barber,
    date: Option<NaiveDate>,
    slot: Option<&str>,
    client_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> Result<NewAppointment, BookingError> {
    let date = date.ok_or(BookingError::InvalidDate)?;
    let slot = match slot {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Err(BookingError::InvalidTime),
    };
    let client_id = client_id.ok_or(BookingError::NotLoggedIn)?;

    let time = NaiveTime::parse_from_str(slot, "%H:%M").map_err(|_| BookingError::InvalidTime)?;
    let starts_at = date.and_time(time).and_utc();

    Ok(NewAppointment {
        barbershop_id: barber.barbershop_id,
        barber_id: barber.id,
        client_id,
        starts_at,
        created_at: now,
    })
}
