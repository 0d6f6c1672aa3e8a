//! Authentication API endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Client,
};

use super::AuthenticatedClient;

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response for register/login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub client: Client,
}

/// Register a new client account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = TokenResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(data): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (token, client) = state
        .services
        .auth
        .register(&data.name, &data.email, &data.password, data.phone.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
            client,
        }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (token, client) = state.services.auth.login(&data.email, &data.password).await?;

    Ok(Json(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        client,
    }))
}

/// Current authenticated client
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current client", body = Client)
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedClient(claims): AuthenticatedClient,
) -> AppResult<Json<Client>> {
    let client = state.services.auth.current_client(claims.client_id).await?;
    Ok(Json(client))
}
