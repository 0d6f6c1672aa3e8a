//! Barber model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::scheduling::WeeklyAvailability;

/// A barber working at a barbershop.
///
/// `availability` holds the weekly working hours (Sunday-first, one entry
/// per weekday) and is stored as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Barber {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub image_url: Option<String>,
    #[schema(value_type = WeeklyAvailability)]
    pub availability: Json<WeeklyAvailability>,
    pub created_at: DateTime<Utc>,
}
