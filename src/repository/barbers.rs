//! Barbers repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Barber,
};

#[derive(Clone)]
pub struct BarbersRepository {
    pool: Pool<Postgres>,
}

impl BarbersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a barber by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Barber> {
        sqlx::query_as::<_, Barber>("SELECT * FROM barbers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Barber {} not found", id)))
    }

    /// List the barbers affiliated with a barbershop, ordered by name
    pub async fn list_by_barbershop(&self, barbershop_id: Uuid) -> AppResult<Vec<Barber>> {
        let rows = sqlx::query_as::<_, Barber>(
            "SELECT * FROM barbers WHERE barbershop_id = $1 ORDER BY name",
        )
        .bind(barbershop_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
