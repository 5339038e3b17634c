// Stub backend and client wiring shared by the integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use revticket_client::domain::ports::Clock;
use revticket_client::interface_adapters::clients::ApiClient;
use revticket_client::interface_adapters::interceptor::TokenInterceptor;
use revticket_client::interface_adapters::state::SystemClock;
use revticket_client::interface_adapters::token_store::FileTokenStore;
use serde_json::{Value, json};
use url::Url;

pub const MATRIX_ID: &str = "3f2b8c1e-9d4a-4b7e-8c2f-1a2b3c4d5e6f";
pub const INCEPTION_ID: &str = "9a8b7c6d-5e4f-4a3b-9c2d-1e0f2a3b4c5d";

// One request as seen by the stub backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SeenRequest {
    pub path_and_query: String,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct StubBackend {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubBackend {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("seen mutex poisoned").clone()
    }

    pub fn request_to(&self, path: &str) -> SeenRequest {
        self.requests()
            .into_iter()
            .find(|req| req.path_and_query.starts_with(path))
            .unwrap_or_else(|| panic!("no request to {path}"))
    }
}

pub fn catalog() -> Value {
    let tomorrow = (Local::now().date_naive() + chrono::Days::new(1))
        .and_hms_opt(18, 30, 0)
        .expect("valid time");
    json!({
        "movies": [
            {
                "id": MATRIX_ID,
                "title": "The Matrix",
                "isActive": true,
                "releaseDate": "1999-03-31",
                "trailerUrl": "https://www.youtube.com/watch?v=vKQi3bBA1y8"
            },
            {
                "id": INCEPTION_ID,
                "title": "Inception",
                "isActive": true,
                "createdAt": "2024-02-01T10:00:00"
            }
        ],
        "showtimes": [
            {
                "id": "s-1",
                "movieId": MATRIX_ID,
                "showDateTime": format_time(tomorrow),
                "status": "ACTIVE",
                "theaterName": "Grand"
            }
        ]
    })
}

fn format_time(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

async fn respond(State(stub): State<StubBackend>, uri: Uri, headers: HeaderMap) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    stub.seen
        .lock()
        .expect("seen mutex poisoned")
        .push(SeenRequest {
            path_and_query,
            authorization,
        });

    let data = catalog();
    let segments: Vec<&str> = uri.path().trim_start_matches('/').split('/').collect();
    match segments.as_slice() {
        ["api", "movies"] => Json(data["movies"].clone()).into_response(),
        ["api", "movies", id] => data["movies"]
            .as_array()
            .and_then(|movies| movies.iter().find(|movie| movie["id"] == *id).cloned())
            .map(|movie| Json(movie).into_response())
            .unwrap_or_else(|| {
                (StatusCode::NOT_FOUND, Json(json!({ "message": "Movie not found" }))).into_response()
            }),
        ["api", "showtimes", "movie", _] => Json(data["showtimes"].clone()).into_response(),
        ["api", "failing", "error-only"] => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "kaput" }))).into_response()
        }
        ["api", "failing", "both-fields"] => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "message": "catalog unavailable", "error": "Bad Gateway" })),
        )
            .into_response(),
        ["api", "failing", "plain-text"] => {
            (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance").into_response()
        }
        ["api", "garbled"] => "not json".into_response(),
        _ => Json(json!({})).into_response(),
    }
}

// Serves the stub backend on an ephemeral port for the current test runtime.
pub async fn spawn_backend() -> (Url, StubBackend) {
    let stub = StubBackend::default();
    let app = Router::new().fallback(respond).with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend failed");
    });

    let base_url = Url::parse(&format!("http://{addr}/api")).expect("valid base url");
    (base_url, stub)
}

pub fn write_token(dir: &Path, token: &str) -> FileTokenStore {
    let path = dir.join("storage.toml");
    std::fs::write(&path, format!("token = \"{token}\"\n")).expect("write client storage");
    FileTokenStore::new(path)
}

pub fn api_client(base_url: Url, tokens: FileTokenStore) -> ApiClient {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let interceptor = TokenInterceptor::new(Arc::new(tokens), clock);
    ApiClient::new(base_url, Duration::from_secs(5), interceptor).expect("api client")
}
