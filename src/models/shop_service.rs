//! Service offering model (haircut, beard trim, ...)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A service offered by a barbershop
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShopService {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    /// ISO 4217 code ("EUR", ...)
    pub currency_code: String,
    pub duration_minutes: i32,
}
