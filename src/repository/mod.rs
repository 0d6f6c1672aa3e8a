//! Repository layer for database operations

pub mod appointments;
pub mod barbers;
pub mod barbershops;
pub mod clients;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub barbershops: barbershops::BarbershopsRepository,
    pub barbers: barbers::BarbersRepository,
    pub clients: clients::ClientsRepository,
    pub appointments: appointments::AppointmentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            barbershops: barbershops::BarbershopsRepository::new(pool.clone()),
            barbers: barbers::BarbersRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Verify database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
