//! Catalog API endpoints (barbershops, barbers, services)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Barber, Barbershop, ShopService},
};

/// List barbershops
#[utoipa::path(
    get,
    path = "/barbershops",
    tag = "catalog",
    responses(
        (status = 200, description = "Barbershop list", body = Vec<Barbershop>)
    )
)]
pub async fn list_barbershops(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Barbershop>>> {
    let shops = state.services.catalog.list_barbershops().await?;
    Ok(Json(shops))
}

/// Get a barbershop
#[utoipa::path(
    get,
    path = "/barbershops/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Barbershop ID")),
    responses(
        (status = 200, description = "Barbershop", body = Barbershop),
        (status = 404, description = "No such barbershop", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_barbershop(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Barbershop>> {
    let shop = state.services.catalog.get_barbershop(id).await?;
    Ok(Json(shop))
}

/// List the barbers of a barbershop
#[utoipa::path(
    get,
    path = "/barbershops/{id}/barbers",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Barbershop ID")),
    responses(
        (status = 200, description = "Barber list", body = Vec<Barber>)
    )
)]
pub async fn list_barbers(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Barber>>> {
    let barbers = state.services.catalog.list_barbers(id).await?;
    Ok(Json(barbers))
}

/// List the services offered by a barbershop
#[utoipa::path(
    get,
    path = "/barbershops/{id}/services",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Barbershop ID")),
    responses(
        (status = 200, description = "Service list", body = Vec<ShopService>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ShopService>>> {
    let services = state.services.catalog.list_services(id).await?;
    Ok(Json(services))
}

/// Get a barber
#[utoipa::path(
    get,
    path = "/barbers/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Barber", body = Barber),
        (status = 404, description = "No such barber", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_barber(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Barber>> {
    let barber = state.services.catalog.get_barber(id).await?;
    Ok(Json(barber))
}
