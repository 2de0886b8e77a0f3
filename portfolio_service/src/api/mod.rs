use anyhow::Context;
use axum::{Router, routing};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::AppState;

pub mod auth;
pub mod context;
pub mod health;
pub mod leases;
pub mod maintenance;
pub mod media;
pub mod payments;
pub mod permissions;
pub mod properties;
pub mod reports;
pub mod search;
mod swagger;
pub mod tenants;
pub mod users;

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let cors = cors_layer();

    let port = state.config.port;
    let app = api_router(state)
        .layer(cors.clone())
        .merge(health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("could not bind service port")?;

    tracing::info!("portfolio service is up and running on port {}", &port);

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn api_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .merge(properties::router())
        .merge(tenants::router())
        .merge(payments::router())
        .merge(maintenance::router())
        .merge(leases::router())
        .merge(users::router())
        .merge(reports::router())
        .route("/search", routing::get(search::handler))
        .route("/media", routing::post(media::handler))
        .route("/auth/me", routing::get(auth::me::handler))
        .layer(axum::middleware::from_fn_with_state(
            app_state.jwt_args.clone(),
            haven_auth::middleware::decode_jwt::handler,
        ));

    Router::new()
        .merge(auth::router())
        .merge(protected)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use chrono::Utc;
    use haven_auth::jwt::JwtValidationArgs;
    use model_user::{Role, User};
    use tower::ServiceExt;

    fn test_router() -> Router {
        api_router(AppState::new_testing())
    }

    #[tokio::test]
    async fn protected_routes_reject_missing_tokens() {
        for uri in [
            "/properties",
            "/tenants",
            "/payments",
            "/maintenance",
            "/leases",
            "/users",
            "/reports/dashboard",
            "/reports/activity",
            "/search?query=sunset",
            "/auth/me",
        ] {
            let response = test_router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "expected 401 for {uri}"
            );
        }
    }

    #[tokio::test]
    async fn protected_routes_reject_garbage_tokens() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/properties")
                    .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tokens_from_another_issuer_are_rejected() {
        let foreign_args = JwtValidationArgs::new(
            "haven_testing".to_string(),
            "evil.example.com".to_string(),
            "super_secret_key".to_string(),
        );
        let user = User {
            id: "u1".to_string(),
            name: "Sarah Admin".to_string(),
            email: "sarah@example.com".to_string(),
            role: Role::Superadmin,
            assigned_properties: vec![],
            created_at: Utc::now(),
        };
        let token = haven_auth::jwt::issue_access_token(&user, &foreign_args).unwrap();

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/properties")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn signup_rejects_short_passwords_before_touching_the_store() {
        let body = serde_json::json!({
            "name": "Sarah",
            "email": "sarah@example.com",
            "password": "short"
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/signup")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reset_password_always_accepts() {
        let body = serde_json::json!({ "email": "whoever@example.com" });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/reset-password")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
