//! In-process fake of the inventory API.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Json;
use serde_json::{Value, json};

use ims_auth::credential::CredentialStore;
use ims_auth::session::SessionState;
use ims_client::ApiClient;
use ims_core::config::{ApiConfig, CredentialConfig};
use ims_storage::memory::MemoryStorage;

/// Token the fake API issues and accepts.
pub const TOKEN: &str = "jwt-admin";

/// One request as the fake API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub auth: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct FakeState {
    pub calls: Mutex<Vec<Recorded>>,
    pub fail_reorder: AtomicBool,
}

/// A running fake API plus a client pointed at it.
pub struct TestApi {
    pub client: ApiClient,
    pub session: SessionState,
    pub state: Arc<FakeState>,
}

impl TestApi {
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let router = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let store = CredentialStore::new(Arc::new(MemoryStorage::new()), &CredentialConfig::default());
        let session = SessionState::new(store);
        let config = ApiConfig {
            base_url: format!("http://{addr}/api"),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, session.clone()).unwrap();

        Self {
            client,
            session,
            state,
        }
    }

    pub fn sign_in(&self) {
        self.session.establish(TOKEN, "ADMIN").unwrap();
    }

    pub fn fail_reorders(&self, fail: bool) {
        self.state.fail_reorder.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Recorded {
        self.calls().last().cloned().unwrap()
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.calls.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        auth: auth.clone(),
        body: parsed.clone(),
    });

    let path = uri.path();
    if path == "/api/auth/login" {
        return login(&parsed);
    }
    if auth.as_deref() != Some(&format!("Bearer {TOKEN}")) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": 401, "message": "Full authentication is required"})),
        );
    }

    match (method, path) {
        (Method::GET, "/api/users/current") => ok(json!({
            "user": {"id": 1, "name": "Ada", "email": "ada@ims.io", "phoneNumber": "555", "role": "ADMIN"}
        })),
        (Method::GET, "/api/categories/all") => ok(json!({
            "categories": [
                {"id": 1, "name": "Tools", "position": 1},
                {"id": 2, "name": "Paint", "position": 0},
            ]
        })),
        (Method::GET, "/api/products/all") => ok(json!({
            "products": [
                {"id": 10, "name": "Hammer", "sku": "HM-1", "price": 12.5, "stockQuantity": 4, "position": 0},
                {"id": 11, "name": "Nails", "sku": "NL-9", "price": 2, "stockQuantity": 900, "position": 1},
            ]
        })),
        (Method::GET, "/api/suppliers/all") => (StatusCode::OK, Json(json!("not an envelope"))),
        (Method::GET, "/api/transactions/all") => ok(json!({"transactions": []})),
        (Method::GET, "/api/transactions/404") => (
            StatusCode::OK,
            Json(json!({"status": 404, "message": "Transaction Not Found"})),
        ),
        (Method::PUT, "/api/products/reorder" | "/api/categories/reorder") => {
            if state.fail_reorder.load(Ordering::SeqCst) {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": 500, "message": "Database unavailable"})),
                )
            } else {
                ok(json!({"message": "Order saved"}))
            }
        }
        (Method::PUT, p) if p.starts_with("/api/transactions/update/") => {
            ok(json!({"message": "Transaction status updated"}))
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "No such endpoint"})),
        ),
    }
}

fn login(body: &Value) -> (StatusCode, Json<Value>) {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@ims.io"), Some("secret")) => ok(json!({"token": TOKEN, "role": "ADMIN"})),
        (Some("manager@ims.io"), Some("secret")) => ok(json!({"token": "jwt-manager", "role": "MANAGER"})),
        (Some("broken@ims.io"), _) => ok(json!({"token": "jwt-broken"})),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 400, "message": "Password Does Not Match"})),
        ),
    }
}

fn ok(mut payload: Value) -> (StatusCode, Json<Value>) {
    payload["status"] = json!(200);
    if payload.get("message").is_none() {
        payload["message"] = json!("success");
    }
    (StatusCode::OK, Json(payload))
}
