//! Barbershops repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Barbershop, ShopService},
};

#[derive(Clone)]
pub struct BarbershopsRepository {
    pool: Pool<Postgres>,
}

impl BarbershopsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all barbershops, ordered by name
    pub async fn list(&self) -> AppResult<Vec<Barbershop>> {
        let rows = sqlx::query_as::<_, Barbershop>("SELECT * FROM barbershops ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a barbershop by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Barbershop> {
        sqlx::query_as::<_, Barbershop>("SELECT * FROM barbershops WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Barbershop {} not found", id)))
    }

    /// List the services offered by a barbershop, ordered by name
    pub async fn list_services(&self, barbershop_id: Uuid) -> AppResult<Vec<ShopService>> {
        let rows = sqlx::query_as::<_, ShopService>(
            "SELECT * FROM shop_services WHERE barbershop_id = $1 ORDER BY name",
        )
        .bind(barbershop_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
