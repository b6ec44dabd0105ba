//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, State};
use std::sync::Arc;

use crate::application::{LoginInput, LoginUseCase, LogoutUseCase};
use crate::domain::entity::CredentialStore;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, MessageResponse};
use crate::presentation::middleware::BearerToken;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub credentials: Arc<CredentialStore>,
}

/// POST /api/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    body: Bytes,
) -> AuthResult<Json<LoginResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let req: LoginRequest = serde_json::from_slice(&body)?;

    let use_case = LoginUseCase::new(state.sessions.clone(), state.credentials.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

/// POST /api/logout
///
/// Runs behind [`require_bearer_token`](crate::presentation::middleware::require_bearer_token),
/// which has already validated the token.
pub async fn logout<S>(
    State(state): State<AuthAppState<S>>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> AuthResult<Json<MessageResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    LogoutUseCase::new(state.sessions.clone())
        .execute(&token)
        .await?;

    Ok(Json(MessageResponse::new("Logged out successfully")))
}
