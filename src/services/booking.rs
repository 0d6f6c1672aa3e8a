//! Booking service: date/slot derivation over the scheduling core,
//! appointment confirmation and lookup

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{Appointment, CreateAppointment},
    repository::Repository,
    scheduling::{self, slots},
};

/// Hard cap on the scan window, whatever the caller asks for
pub const MAX_SCAN_WINDOW_DAYS: u32 = 365;

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    /// Dates with any availability within the scan window starting today.
    ///
    /// `days` overrides the configured window length when given, up to
    /// [`MAX_SCAN_WINDOW_DAYS`].
    pub async fn available_dates(
        &self,
        barber_id: Uuid,
        days: Option<u32>,
    ) -> AppResult<Vec<NaiveDate>> {
        let days = days.unwrap_or(self.config.scan_window_days);
        if days > MAX_SCAN_WINDOW_DAYS {
            return Err(AppError::Validation(format!(
                "days must be at most {}",
                MAX_SCAN_WINDOW_DAYS
            )));
        }
        let barber = self.repository.barbers.get_by_id(barber_id).await?;
        let today = Utc::now().date_naive();
        Ok(barber.availability.available_dates(today, days))
    }

    /// Bookable slots for a barber on one date.
    ///
    /// A malformed availability entry is logged and degrades to an empty
    /// list; the caller never sees a hard error for bad schedule data.
    pub async fn available_slots(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<String>> {
        let barber = self.repository.barbers.get_by_id(barber_id).await?;
        let entry = barber.availability.entry_for(date);
        match slots::try_generate_slots(entry) {
            Ok(slots) => Ok(slots),
            Err(err) => {
                tracing::warn!(%barber_id, entry, %err, "malformed availability entry");
                Ok(Vec::new())
            }
        }
    }

    /// Confirm a booking: validate the selection, check for a double booking,
    /// persist the appointment
    pub async fn confirm(
        &self,
        client_id: Option<Uuid>,
        data: &CreateAppointment,
    ) -> AppResult<Appointment> {
        let barber = self.repository.barbers.get_by_id(data.barber_id).await?;

        let new = scheduling::confirm_appointment(
            &barber,
            data.date,
            data.time.as_deref(),
            client_id,
            Utc::now(),
        )?;

        if self
            .repository
            .appointments
            .exists_at(barber.id, new.starts_at)
            .await?
        {
            return Err(AppError::Conflict("Time slot is already booked".to_string()));
        }

        self.repository.appointments.insert(&new).await
    }

    /// The client's upcoming appointments, ascending by start time
    pub async fn upcoming_appointments(&self, client_id: Uuid) -> AppResult<Vec<Appointment>> {
        self.repository
            .appointments
            .list_upcoming(client_id, Utc::now())
            .await
    }
}
