use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::cors::apply_cors;
use crate::presentation::middleware::layers::{apply_limits, apply_trace};
use crate::presentation::openapi::ApiDoc;
use crate::presentation::{AppState, http_handlers};

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> Result<()> {
    let app = build_app(settings, state)?;

    let listener = TcpListener::bind(&settings.http_addr).await?;

    info!("HTTP server listening on {}", settings.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_app(settings: &Settings, state: AppState) -> Result<Router> {
    let app = build_router(state);
    let app = apply_limits(
        app,
        settings.http_request_body_limit_bytes,
        settings.http_concurrency_limit,
    );
    let app = apply_trace(app);
    apply_cors(app, &settings.cors_origins)
}

fn build_router(state: AppState) -> Router {
    http_handlers::routes(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::build_app;
    use crate::application::contact_service::ContactService;
    use crate::data::repositories::memory::InMemoryContactRepository;
    use crate::infrastructure::settings::Settings;
    use crate::presentation::AppState;
    use crate::presentation::middleware::auth::TokenRegistry;

    const WRITE_TOKEN: &str = "write-token";
    const READ_TOKEN: &str = "read-token";

    fn test_app(body_limit: usize) -> Router {
        let settings = Settings {
            http_addr: "127.0.0.1:0".to_string(),
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
            http_request_body_limit_bytes: body_limit,
            http_concurrency_limit: 16,
            api_token: WRITE_TOKEN.to_string(),
            readonly_token: READ_TOKEN.to_string(),
        };
        let state = AppState::new(
            Arc::new(ContactService::new(InMemoryContactRepository::new())),
            Arc::new(TokenRegistry::new(
                &settings.api_token,
                &settings.readonly_token,
            )),
        );
        build_app(&settings, state).expect("app must build")
    }

    fn request(
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request must build"),
            None => builder.body(Body::empty()).expect("request must build"),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body must be json")
        };
        (status, body)
    }

    async fn create(app: &Router, name: &str, email: &str) -> (StatusCode, Value) {
        let body = json!({ "name": name, "email": email }).to_string();
        send(
            app,
            request(Method::POST, "/api/contacts", Some(WRITE_TOKEN), Some(body)),
        )
        .await
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let app = test_app(1024);
        let (status, body) = send(&app, request(Method::GET, "/healthz", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "contacts": 0 }));
    }

    #[tokio::test]
    async fn create_then_get_contact() {
        let app = test_app(1024);

        let (status, created) = create(&app, "Ada", "ADA@example.com").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["email"], "ada@example.com");

        let (status, fetched) =
            send(&app, request(Method::GET, "/api/contacts/1", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Ada");

        let (status, listed) = send(&app, request(Method::GET, "/api/contacts", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["total"], 1);
    }

    #[tokio::test]
    async fn missing_email_is_reported_with_200() {
        let app = test_app(1024);
        let body = json!({ "name": "Ada" }).to_string();

        let (status, errors) = send(
            &app,
            request(Method::POST, "/api/contacts", Some(WRITE_TOKEN), Some(body)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(errors, json!({ "email": "must be present" }));
    }

    #[tokio::test]
    async fn duplicate_email_is_reported_with_200() {
        let app = test_app(1024);
        create(&app, "Ada", "ada@example.com").await;

        let (status, errors) = create(&app, "Ada Again", "ada@example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(errors, json!({ "email": "already registered" }));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = test_app(1024);

        let (status, errors) = send(
            &app,
            request(
                Method::POST,
                "/api/contacts",
                Some(WRITE_TOKEN),
                Some("{not json".to_string()),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(errors.get("body").is_some());
    }

    #[tokio::test]
    async fn oversized_body_is_bad_request() {
        let app = test_app(64);
        let name = "a".repeat(200);

        let (status, errors) = create(&app, &name, "ada@example.com").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(errors.get("body").is_some());
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let app = test_app(1024);
        let body = json!({ "name": "Ada", "email": "ada@example.com" }).to_string();

        let (status, errors) = send(
            &app,
            request(Method::POST, "/api/contacts", None, Some(body)),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(errors, json!({ "authorization": "bearer token required" }));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let app = test_app(1024);

        let (status, errors) = send(
            &app,
            request(Method::DELETE, "/api/contacts/1", Some("nope"), None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(errors, json!({ "authorization": "invalid token" }));
    }

    #[tokio::test]
    async fn readonly_token_is_forbidden() {
        let app = test_app(1024);
        create(&app, "Ada", "ada@example.com").await;

        let (status, errors) = send(
            &app,
            request(Method::DELETE, "/api/contacts/1", Some(READ_TOKEN), None),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(errors, json!({ "authorization": "token is read-only" }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = test_app(1024);
        create(&app, "Ada", "ada@example.com").await;

        let (status, _) = send(
            &app,
            request(Method::DELETE, "/api/contacts/1", Some(WRITE_TOKEN), None),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, errors) =
            send(&app, request(Method::GET, "/api/contacts/1", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(errors, json!({ "id": "no such contact" }));
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let app = test_app(1024);

        let (status, errors) =
            send(&app, request(Method::GET, "/api/contacts/abc", None, None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(errors, json!({ "id": "must be a non-negative integer" }));
    }
}
