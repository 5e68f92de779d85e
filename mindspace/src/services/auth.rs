//! Authentication service
//!
//! Registration and sign-in over the local user collection. Both flows
//! validate first, then wait out a simulated round trip before touching the
//! store. The wait is tied to a [`CancellationToken`] owned by the caller:
//! when the initiating view goes away it cancels the token and the flow
//! finishes with `Cancelled` without writing anything.

use crate::config::SIMULATED_AUTH_LATENCY;
use crate::crypto::{hash_password, verify_password};
use crate::database::{CreateUserRequest, LoginForm, RegistrationForm, Repository, Session};
use crate::error::{AppError, Result};
use crate::services::SessionManager;
use crate::validation::{validate_login, validate_registration};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Service for account registration and sign-in
#[derive(Clone)]
pub struct AuthService {
    repo: Repository,
    sessions: SessionManager,
    latency: Duration,
}

impl AuthService {
    pub fn new(repo: Repository, sessions: SessionManager) -> Self {
        Self {
            repo,
            sessions,
            latency: SIMULATED_AUTH_LATENCY,
        }
    }

    /// Override the simulated round-trip delay
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Auth request cancelled before completion");
                Err(AppError::Cancelled)
            }
            _ = tokio::time::sleep(self.latency) => Ok(()),
        }
    }

    /// Create an account and sign it in
    pub async fn register(
        &self,
        form: RegistrationForm,
        cancel: &CancellationToken,
    ) -> Result<Session> {
        let errors = validate_registration(&form);
        if errors.has_errors() {
            return Err(AppError::Validation(errors));
        }

        self.simulate_latency(cancel).await?;

        tracing::info!("Registering account: {}", form.email);

        // Checked before hashing so a duplicate costs nothing
        if self.repo.find_user_by_email(&form.email)?.is_some() {
            tracing::warn!("Registration rejected, email already in use: {}", form.email);
            return Err(AppError::DuplicateEmail(form.email));
        }

        let password_hash = hash_password(&form.password)?;

        let user = self.repo.create_user(CreateUserRequest {
            name: form.name.trim().to_string(),
            email: form.email,
            password_hash,
        })?;

        let session = self.sessions.login(&user.email, &user.name)?;

        tracing::info!("Account registered: {}", user.email);
        Ok(session)
    }

    /// Sign in with email and password
    pub async fn login(&self, form: LoginForm, cancel: &CancellationToken) -> Result<Session> {
        let errors = validate_login(&form);
        if errors.has_errors() {
            return Err(AppError::Validation(errors));
        }

        self.simulate_latency(cancel).await?;

        let user = self
            .repo
            .find_user_by_email(&form.email)?
            .filter(|user| verify_password(&form.password, &user.password_hash));

        let Some(user) = user else {
            tracing::warn!("Login failed for: {}", form.email);
            return Err(AppError::InvalidCredentials);
        };

        let session = self.sessions.login(&user.email, &user.name)?;

        tracing::info!("Login successful: {}", user.email);
        Ok(session)
    }

    /// Sign out
    pub fn logout(&self) -> Result<()> {
        self.sessions.logout()
    }
}
