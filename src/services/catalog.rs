//! Catalog service (barbershops, barbers, offered services)

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Barber, Barbershop, ShopService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_barbershops(&self) -> AppResult<Vec<Barbershop>> {
        self.repository.barbershops.list().await
    }

    pub async fn get_barbershop(&self, id: Uuid) -> AppResult<Barbershop> {
        self.repository.barbershops.get_by_id(id).await
    }

    pub async fn list_barbers(&self, barbershop_id: Uuid) -> AppResult<Vec<Barber>> {
        // 404 on an unknown shop rather than an empty list
        self.repository.barbershops.get_by_id(barbershop_id).await?;
        self.repository.barbers.list_by_barbershop(barbershop_id).await
    }

    pub async fn get_barber(&self, id: Uuid) -> AppResult<Barber> {
        self.repository.barbers.get_by_id(id).await
    }

    pub async fn list_services(&self, barbershop_id: Uuid) -> AppResult<Vec<ShopService>> {
        self.repository.barbershops.get_by_id(barbershop_id).await?;
        self.repository.barbershops.list_services(barbershop_id).await
    }
}
