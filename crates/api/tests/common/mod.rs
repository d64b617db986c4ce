#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trankaki_api::config::ServerConfig;
use trankaki_api::router::build_app_router;
use trankaki_api::state::AppState;
use trankaki_core::locker::{LockerSize, LockerStatus};
use trankaki_core::types::DbId;
use trankaki_db::models::beach::CreateBeach;
use trankaki_db::models::locker::CreateLocker;
use trankaki_db::models::user::CreateUser;
use trankaki_db::repositories::{BeachRepo, LockerRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the error envelope.
pub async fn expect_error(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert!(json["message"].is_string(), "missing message: {json}");
    assert!(json["error"].is_string(), "missing error: {json}");
    json
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub struct Fixture {
    pub usuario_id: DbId,
    pub armario_id: DbId,
}

/// One user and one available medium locker `B-12` at Copacabana.
pub async fn seed(pool: &PgPool) -> Fixture {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            nome: "Ana".to_string(),
            cpf: "111".to_string(),
        },
    )
    .await
    .unwrap();
    let beach = BeachRepo::create(
        pool,
        &CreateBeach {
            nome: "Copacabana".to_string(),
            cidade: "Rio de Janeiro".to_string(),
        },
    )
    .await
    .unwrap();
    let locker = LockerRepo::create(
        pool,
        &CreateLocker {
            praia_id: beach.id,
            cod_armario: "B-12".to_string(),
            tamanho: LockerSize::Medium,
            status: Some(LockerStatus::Available),
        },
    )
    .await
    .unwrap();

    Fixture {
        usuario_id: user.id,
        armario_id: locker.id,
    }
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}
