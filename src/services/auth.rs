//! Authentication service: client registration, login, JWT issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Client, ClientClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new client account and return a token plus the client
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AppResult<(String, Client)> {
        let password_hash = self.hash_password(password)?;
        let client = self
            .repository
            .clients
            .create(name, email, &password_hash, phone)
            .await?;
        let token = self.create_token(&client)?;
        Ok((token, client))
    }

    /// Authenticate a client by email and return a JWT token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, Client)> {
        let client = self
            .repository
            .clients
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !self.verify_password(&client, password)? {
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        let token = self.create_token(&client)?;
        Ok((token, client))
    }

    /// Get the client behind a set of claims
    pub async fn current_client(&self, client_id: Uuid) -> AppResult<Client> {
        self.repository.clients.get_by_id(client_id).await
    }

    fn create_token(&self, client: &Client) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = ClientClaims {
            sub: client.email.clone(),
            client_id: client.id,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, client: &Client, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&client.password_hash)
            .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
