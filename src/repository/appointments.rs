//! Appointments repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Appointment, NewAppointment},
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Persist a confirmed appointment
    pub async fn insert(&self, new: &NewAppointment) -> AppResult<Appointment> {
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (id, barbershop_id, barber_id, client_id, starts_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.barbershop_id)
        .bind(new.barber_id)
        .bind(new.client_id)
        .bind(new.starts_at)
        .bind(new.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // unique index on (barber_id, starts_at) backs the conflict check
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Time slot is already booked".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Whether the barber already has an appointment at this instant
    pub async fn exists_at(&self, barber_id: Uuid, starts_at: DateTime<Utc>) -> AppResult<bool> {
        let found: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM appointments WHERE barber_id = $1 AND starts_at = $2",
        )
        .bind(barber_id)
        .bind(starts_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }

    /// A client's appointments from `since` onwards, ascending by start time
    pub async fn list_upcoming(
        &self,
        client_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE client_id = $1 AND starts_at >= $2
            ORDER BY starts_at ASC
            "#,
        )
        .bind(client_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
