//! Unit tests for Auth crate

#[cfg(test)]
mod registry_tests {
    use crate::domain::repository::SessionRepository;
    use crate::infra::InMemorySessionRegistry;
    use chrono::Duration;

    #[tokio::test]
    async fn test_issue_then_validate() {
        let registry = InMemorySessionRegistry::new(Duration::hours(24));

        let session = registry.issue().await.unwrap();
        assert_eq!(session.token.len(), 43);
        assert!(registry.validate(&session.token).await.unwrap());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let registry = InMemorySessionRegistry::new(Duration::hours(24));
        assert!(!registry.validate("nope").await.unwrap());
        assert!(!registry.validate("").await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_token_rejected_before_sweep() {
        let registry = InMemorySessionRegistry::new(Duration::zero());

        let session = registry.issue().await.unwrap();
        assert!(!registry.validate(&session.token).await.unwrap());
        // Still stored until the sweep runs
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let registry = InMemorySessionRegistry::new(Duration::hours(24));
        let session = registry.issue().await.unwrap();

        registry.revoke(&session.token).await.unwrap();
        assert!(!registry.validate(&session.token).await.unwrap());

        registry.revoke(&session.token).await.unwrap();
        registry.revoke("never-issued").await.unwrap();
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let live = InMemorySessionRegistry::new(Duration::hours(24));
        let keep = live.issue().await.unwrap();
        assert_eq!(live.sweep().await.unwrap(), 0);
        assert!(live.validate(&keep.token).await.unwrap());

        let dead = InMemorySessionRegistry::new(Duration::zero());
        dead.issue().await.unwrap();
        dead.issue().await.unwrap();
        assert_eq!(dead.sweep().await.unwrap(), 2);
        assert!(dead.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let registry = InMemorySessionRegistry::new(Duration::hours(24));
        let other = registry.clone();

        let session = registry.issue().await.unwrap();
        assert!(other.validate(&session.token).await.unwrap());

        other.revoke(&session.token).await.unwrap();
        assert!(!registry.validate(&session.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_issue() {
        let registry = InMemorySessionRegistry::new(Duration::hours(24));

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.issue().await.unwrap().token })
            })
            .collect();

        let mut tokens = Vec::new();
        for handle in handles {
            tokens.push(handle.await.unwrap());
        }
        tokens.sort();
        tokens.dedup();

        assert_eq!(tokens.len(), 32);
        assert_eq!(registry.len().await, 32);
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase};
    use crate::domain::entity::{Credential, CredentialStore};
    use crate::error::AuthError;
    use crate::infra::InMemorySessionRegistry;
    use chrono::Duration;

    fn credentials() -> Arc<CredentialStore> {
        Arc::new(CredentialStore::new(vec![Credential::new("user1", "12345")]))
    }

    fn login_input(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_live_token() {
        let registry = Arc::new(InMemorySessionRegistry::new(Duration::hours(24)));
        let login = LoginUseCase::new(registry.clone(), credentials());

        let output = login.execute(login_input("user1", "12345")).await.unwrap();

        let check = CheckSessionUseCase::new(registry);
        assert!(check.is_valid(&output.token).await.unwrap());
        assert!(output.expires_at > chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_login_wrong_password_issues_nothing() {
        let registry = Arc::new(InMemorySessionRegistry::new(Duration::hours(24)));
        let login = LoginUseCase::new(registry.clone(), credentials());

        let err = login
            .execute(login_input("user1", "wrong"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = login.execute(login_input("", "")).await.err().unwrap();
        assert!(matches!(err, AuthError::InvalidCredentials));

        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let registry = Arc::new(InMemorySessionRegistry::new(Duration::hours(24)));
        let login = LoginUseCase::new(registry, credentials());

        assert!(login.execute(login_input("User1", "12345")).await.is_err());
    }

    #[tokio::test]
    async fn test_logout_revokes_only_presented_token() {
        let registry = Arc::new(InMemorySessionRegistry::new(Duration::hours(24)));
        let login = LoginUseCase::new(registry.clone(), credentials());

        let first = login.execute(login_input("user1", "12345")).await.unwrap();
        let second = login.execute(login_input("user1", "12345")).await.unwrap();

        LogoutUseCase::new(registry.clone())
            .execute(&first.token)
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(registry);
        let err = check.require(&first.token).await.err().unwrap();
        assert!(matches!(err, AuthError::InvalidToken));
        check.require(&second.token).await.unwrap();
    }
}

#[cfg(test)]
mod sweeper_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::application::SweepSessionsUseCase;
    use crate::domain::repository::SessionRepository;
    use crate::infra::InMemorySessionRegistry;
    use tokio::sync::watch;

    #[tokio::test]
    async fn test_run_once_reports_count() {
        let registry = Arc::new(InMemorySessionRegistry::new(chrono::Duration::zero()));
        registry.issue().await.unwrap();

        let sweeper = SweepSessionsUseCase::new(registry.clone(), Duration::from_secs(1800));
        assert_eq!(sweeper.run_once().await.unwrap(), 1);
        assert_eq!(sweeper.run_once().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_sweep_then_shutdown() {
        let registry = Arc::new(InMemorySessionRegistry::new(chrono::Duration::zero()));
        registry.issue().await.unwrap();

        let (tx, rx) = watch::channel(false);
        let handle =
            SweepSessionsUseCase::new(registry.clone(), Duration::from_secs(1800)).spawn(rx);

        // Nothing happens before the first full interval
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(registry.len().await, 1);

        tokio::time::sleep(Duration::from_secs(1800)).await;
        assert!(registry.is_empty().await);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_stops_sweeper() {
        let registry = Arc::new(InMemorySessionRegistry::new(chrono::Duration::hours(1)));

        let (tx, rx) = watch::channel(false);
        let handle = SweepSessionsUseCase::new(registry, Duration::from_secs(1800)).spawn(rx);

        drop(tx);
        handle.await.unwrap();
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::domain::entity::{Credential, CredentialStore};
    use crate::infra::InMemorySessionRegistry;
    use crate::presentation::router::auth_router;

    fn app() -> Router {
        let sessions = InMemorySessionRegistry::new(chrono::Duration::hours(24));
        let credentials = CredentialStore::new(vec![Credential::new("user1", "12345")]);
        auth_router(sessions, credentials)
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn logout_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::POST).uri("/logout");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "/login",
                r#"{"username":"user1","password":"12345"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let app = app();
        let token = login(&app).await;
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let response = app()
            .oneshot(json_request(
                "/login",
                r#"{"username":"user1","password":"nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid username or password" })
        );
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_unauthorized() {
        let response = app().oneshot(json_request("/login", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_malformed_body() {
        let response = app()
            .oneshot(json_request("/login", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid request payload" })
        );
    }

    #[tokio::test]
    async fn test_login_ignores_content_type() {
        let app = app();
        let content_types = [
            None,
            Some("application/x-www-form-urlencoded"),
            Some("text/plain"),
        ];
        for content_type in content_types {
            let mut builder = Request::builder().method(Method::POST).uri("/login");
            if let Some(value) = content_type {
                builder = builder.header(header::CONTENT_TYPE, value);
            }
            let request = builder
                .body(Body::from(r#"{"username":"user1","password":"12345"}"#))
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{content_type:?}");
            assert!(body_json(response).await["token"].is_string());
        }
    }

    #[tokio::test]
    async fn test_login_empty_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/login")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid request payload" })
        );
    }

    #[tokio::test]
    async fn test_logout_then_token_rejected() {
        let app = app();
        let token = login(&app).await;
        let bearer = format!("Bearer {token}");

        let response = app
            .clone()
            .oneshot(logout_request(Some(&bearer)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Logged out successfully" })
        );

        let response = app.oneshot(logout_request(Some(&bearer))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid or expired token" })
        );
    }

    #[tokio::test]
    async fn test_logout_gate_messages() {
        let cases = [
            (None, "Authorization header required"),
            (Some("Token abc"), "Invalid authorization format"),
            (Some("bearer abc"), "Invalid authorization format"),
            (Some("Bearer "), "Token required"),
            (Some("Bearer unknown"), "Invalid or expired token"),
        ];

        let app = app();
        for (authorization, expected) in cases {
            let response = app
                .clone()
                .oneshot(logout_request(authorization))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{authorization:?}");
            assert_eq!(body_json(response).await, json!({ "error": expected }));
        }
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingAuthorization, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidAuthorizationFormat, StatusCode::UNAUTHORIZED),
            (AuthError::TokenRequired, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidPayload, StatusCode::BAD_REQUEST),
            (
                AuthError::CredentialLoad {
                    path: "config.yaml".into(),
                    reason: "missing".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_internal_detail_hidden() {
        let app_error = AuthError::CredentialLoad {
            path: "/etc/heroes/config.yaml".into(),
            reason: "permission denied".into(),
        }
        .to_app_error();
        assert_eq!(app_error.message(), "Internal server error");

        let app_error = AuthError::InvalidToken.to_app_error();
        assert_eq!(app_error.message(), "Invalid or expired token");
    }
}
