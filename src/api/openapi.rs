//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, booking, catalog, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Barbershop API",
        version = "0.1.0",
        description = "Barbershop booking system REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Catalog
        catalog::list_barbershops,
        catalog::get_barbershop,
        catalog::list_barbers,
        catalog::list_services,
        catalog::get_barber,
        // Booking
        booking::available_dates,
        booking::available_slots,
        booking::create_appointment,
        booking::list_my_appointments,
    ),
    components(
        schemas(
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::TokenResponse,
            // Catalog
            crate::models::Barbershop,
            crate::models::Barber,
            crate::models::ShopService,
            crate::models::Client,
            crate::scheduling::WeeklyAvailability,
            // Booking
            crate::models::Appointment,
            crate::models::appointment::CreateAppointment,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Client authentication"),
        (name = "catalog", description = "Barbershops, barbers and services"),
        (name = "booking", description = "Availability and appointments")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
