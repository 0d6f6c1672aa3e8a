//! Booking API endpoints (available dates, slots, appointments)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Appointment, CreateAppointment},
};

use super::AuthenticatedClient;

/// Query parameters for the available-dates scan
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DatesQuery {
    /// Scan window length in days (defaults to the configured window)
    pub days: Option<u32>,
}

/// Query parameters for slot listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotsQuery {
    /// Date to list slots for (YYYY-MM-DD)
    pub date: String,
}

/// Dates with any availability for a barber within the scan window
#[utoipa::path(
    get,
    path = "/barbers/{id}/dates",
    tag = "booking",
    params(("id" = Uuid, Path, description = "Barber ID"), DatesQuery),
    responses(
        (status = 200, description = "Bookable dates, chronological", body = Vec<NaiveDate>),
        (status = 404, description = "No such barber", body = crate::error::ErrorResponse)
    )
)]
pub async fn available_dates(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DatesQuery>,
) -> AppResult<Json<Vec<NaiveDate>>> {
    let dates = state.services.booking.available_dates(id, query.days).await?;
    Ok(Json(dates))
}

/// Bookable time slots for a barber on one date
#[utoipa::path(
    get,
    path = "/barbers/{id}/slots",
    tag = "booking",
    params(("id" = Uuid, Path, description = "Barber ID"), SlotsQuery),
    responses(
        (status = 200, description = "Bookable HH:MM slots, ascending", body = Vec<String>),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn available_slots(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<Vec<String>>> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("invalid date".to_string()))?;
    let slots = state.services.booking.available_slots(id, date).await?;
    Ok(Json(slots))
}

/// Confirm a booking
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "booking",
    security(("bearer_auth" = [])),
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid selection", body = crate::error::ErrorResponse),
        (status = 409, description = "Slot already booked", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedClient(claims): AuthenticatedClient,
    Json(data): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state
        .services
        .booking
        .confirm(Some(claims.client_id), &data)
        .await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// The authenticated client's upcoming appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "booking",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Upcoming appointments, ascending", body = Vec<Appointment>)
    )
)]
pub async fn list_my_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedClient(claims): AuthenticatedClient,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state
        .services
        .booking
        .upcoming_appointments(claims.client_id)
        .await?;
    Ok(Json(appointments))
}
