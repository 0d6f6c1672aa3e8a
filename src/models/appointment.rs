//! Appointment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A confirmed appointment. Immutable once persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub barber_id: Uuid,
    pub client_id: Uuid,
    /// Appointment instant (selected date + selected slot, seconds zeroed)
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A validated appointment awaiting persistence.
///
/// Produced by the confirmation step once all preconditions hold; the id is
/// assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub barbershop_id: Uuid,
    pub barber_id: Uuid,
    pub client_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Booking confirmation request.
///
/// `date` and `time` are optional on purpose: an incomplete selection is a
/// validation failure reported by the confirmation step, not a 422 from the
/// JSON layer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAppointment {
    pub barber_id: Uuid,
    /// Selected date (YYYY-MM-DD)
    pub date: Option<chrono::NaiveDate>,
    /// Selected slot (HH:MM, 24-hour)
    pub time: Option<String>,
}
