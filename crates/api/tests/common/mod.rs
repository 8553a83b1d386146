#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use swapi_api::config::ServerConfig;
use swapi_api::router::build_app_router;
use swapi_api::state::AppState;
use swapi_db::Database;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(doc_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path: PathBuf::from("unused.dat"),
        database_max_connections: 4,
        doc_dir,
        cors_origins: vec!["http://localhost:8001".to_string()],
        request_timeout_secs: 30,
        bootstrap_schema: true,
    }
}

/// The application router over a database file in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub db: Database,
    pub dir: TempDir,
}

impl TestApp {
    /// A fresh router sharing the same database; every request consumes one.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router, with the production middleware
/// stack, over an empty dataset file.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::open(dir.path().join("test.dat"), 4)
        .await
        .expect("open test database");
    db.ensure_schema().await.expect("create schema");

    let doc_dir = dir.path().join("doc");
    std::fs::create_dir_all(&doc_dir).expect("create doc dir");

    let config = test_config(doc_dir);
    let state = AppState {
        db: db.clone(),
        config: Arc::new(config.clone()),
    };
    let router = build_app_router(state, &config);

    TestApp { router, db, dir }
}

/// Same as [`build_test_app`] with a few dataset rows loaded.
pub async fn build_seeded_app() -> TestApp {
    let app = build_test_app().await;
    sqlx::raw_sql(SEED)
        .execute(app.db.pool())
        .await
        .expect("seed test database");
    app
}

const SEED: &str = r#"
INSERT INTO people (id, url, name, height, mass, hair_color, skin_color, eye_color, birth_year, gender, homeworld, created, edited) VALUES
    (1, 1, 'Luke Skywalker', 172, 77, 'blond', 'fair', 'blue', '19BBY', 'male', 1, '2014-12-09T13:50:51.644000Z', '2014-12-20T21:17:56.891000Z'),
    (2, 2, 'C-3PO', 167, 75, 'na', 'gold', 'yellow', '112BBY', 'na', 1, '2014-12-10T15:10:51.357000Z', '2014-12-20T21:17:50.309000Z'),
    (16, 16, 'Jabba Desilijic Tiure', 175, '1,358', 'na', 'green-tan, brown', 'orange', '600BBY', 'hermaphrodite', 24, '2014-12-10T17:11:31.638000Z', '2014-12-20T21:17:50.338000Z');

INSERT INTO starships (id, url, name, model, manufacturer, cost_in_credits, length, max_atmosphering_speed, crew, passengers, cargo_capacity, consumables, hyperdrive_rating, MGLT, starship_class, created, edited) VALUES
    (12, 12, 'X-wing', 'T-65 X-wing', 'Incom Corporation', 149999, 12.5, 1050, 1, 0, 110, '1 week', 1.0, 100, 'Starfighter', '2014-12-12T11:19:05.340000Z', '2014-12-22T17:35:44.491233Z');

INSERT INTO vehicles (id, url, name, model, manufacturer, cost_in_credits, length, max_atmosphering_speed, crew, passengers, cargo_capacity, consumables, vehicle_class, created, edited) VALUES
    (14, 14, 'Snowspeeder', 't-47 airspeeder', 'Incom corporation', 'unknown', 4.5, 650, 2, 0, 10, 'none', 'airspeeder', '2014-12-15T12:22:12Z', '2014-12-22T18:21:15.623033Z');

INSERT INTO people_starships (people, starships) VALUES (1, 12);
INSERT INTO people_vehicles (people, vehicles) VALUES (1, 14);
INSERT INTO people_species (people, species) VALUES (1, 1);
"#;

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .expect("build request");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, json).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, json).await
}

async fn send_json(app: Router, method: Method, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is JSON")
}
