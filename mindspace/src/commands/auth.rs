//! Account commands
//!
//! Registration and sign-in take a cancellation token owned by the calling
//! view; dropping the view should cancel it.

use crate::app::AppState;
use crate::database::{LoginForm, RegistrationForm, Session};
use crate::error::Result;
use tokio_util::sync::CancellationToken;

/// Create an account and sign it in
pub async fn register(
    state: &AppState,
    form: RegistrationForm,
    cancel: &CancellationToken,
) -> Result<Session> {
    state.auth_service.register(form, cancel).await
}

/// Sign in
pub async fn login(
    state: &AppState,
    form: LoginForm,
    cancel: &CancellationToken,
) -> Result<Session> {
    state.auth_service.login(form, cancel).await
}

/// Sign out
pub fn logout(state: &AppState) -> Result<()> {
    state.auth_service.logout()
}

/// Signed-in user, used to pick between "Sign In" and "Dashboard" links
pub fn current_user(state: &AppState) -> Result<Option<Session>> {
    state.sessions.current_session()
}
