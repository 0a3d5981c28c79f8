//! Shared harness: a stateful fake inventory API plus a wired client.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Json;
use serde_json::{Value, json};

use ims_core::config::{AppConfig, RollbackPolicy};
use ims_service::AppContext;
use ims_storage::memory::MemoryStorage;

pub const ADMIN_TOKEN: &str = "jwt-admin";
pub const MANAGER_TOKEN: &str = "jwt-manager";

/// Durable server-side state.
pub struct ServerState {
    pub products: Mutex<Vec<Value>>,
    pub categories: Mutex<Vec<Value>>,
    pub fail_reorder: AtomicBool,
    pub reorder_bodies: Mutex<Vec<Value>>,
}

impl ServerState {
    fn seeded() -> Self {
        let products = ["Hammer", "Nails", "Saw", "Drill", "Bolt M6", "Bolt M8"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "id": 100 + i,
                    "name": name,
                    "sku": format!("SKU-{i}"),
                    "price": 10 + i,
                    "stockQuantity": 5 * i,
                    "position": i,
                })
            })
            .collect();
        let categories = ["Tools", "Fasteners", "Paint"]
            .iter()
            .enumerate()
            .map(|(i, name)| json!({"id": i + 1, "name": name, "position": i}))
            .collect();
        Self {
            products: Mutex::new(products),
            categories: Mutex::new(categories),
            fail_reorder: AtomicBool::new(false),
            reorder_bodies: Mutex::new(Vec::new()),
        }
    }

    /// Product names in durable position order.
    pub fn product_order(&self) -> Vec<String> {
        sorted_names(&self.products.lock().unwrap())
    }

    /// Category names in durable position order.
    pub fn category_order(&self) -> Vec<String> {
        sorted_names(&self.categories.lock().unwrap())
    }
}

fn sorted_names(items: &[Value]) -> Vec<String> {
    let mut items = items.to_vec();
    items.sort_by_key(|v| v["position"].as_i64().unwrap_or(i64::MAX));
    items
        .iter()
        .map(|v| v["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// A running fake API and a client context pointed at it.
pub struct TestApp {
    pub ctx: AppContext,
    pub server: Arc<ServerState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_policy(RollbackPolicy::Snapshot).await
    }

    pub async fn with_policy(rollback: RollbackPolicy) -> Self {
        let server = Arc::new(ServerState::seeded());
        let router = Router::new().fallback(handle).with_state(server.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let mut config = AppConfig::default();
        config.api.base_url = format!("http://{addr}/api");
        config.collection.product_page_size = 3;
        config.collection.rollback = rollback;
        let ctx = AppContext::with_storage(config, Arc::new(MemoryStorage::new())).unwrap();

        Self { ctx, server }
    }

    pub async fn login_admin(&self) {
        self.ctx.login.login("admin@ims.io", "secret").await.unwrap();
    }

    pub async fn login_manager(&self) {
        self.ctx.login.login("manager@ims.io", "secret").await.unwrap();
    }

    pub fn fail_reorders(&self, fail: bool) {
        self.server.fail_reorder.store(fail, Ordering::SeqCst);
    }
}

async fn handle(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let path = uri.path();
    if path == "/api/auth/login" {
        return login(&body);
    }

    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from);
    let role = match bearer.as_deref() {
        Some(ADMIN_TOKEN) => "ADMIN",
        Some(MANAGER_TOKEN) => "MANAGER",
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"status": 401, "message": "Full authentication is required"})),
            );
        }
    };

    match (method, path) {
        (Method::GET, "/api/users/current") => ok(json!({
            "user": {"id": 1, "name": "Test User", "email": "user@ims.io", "phoneNumber": "555", "role": role}
        })),
        (Method::GET, "/api/products/all") => {
            ok(json!({"products": state.products.lock().unwrap().clone()}))
        }
        (Method::GET, "/api/categories/all") => {
            ok(json!({"categories": state.categories.lock().unwrap().clone()}))
        }
        (Method::PUT, "/api/products/reorder") => {
            state.reorder_bodies.lock().unwrap().push(body.clone());
            if state.fail_reorder.load(Ordering::SeqCst) {
                return failure();
            }
            let mut products = state.products.lock().unwrap();
            for update in body.as_array().cloned().unwrap_or_default() {
                if let Some(p) = products.iter_mut().find(|p| p["id"] == update["id"]) {
                    p["position"] = update["position"].clone();
                }
            }
            ok(json!({"message": "Product order saved"}))
        }
        (Method::PUT, "/api/categories/reorder") => {
            state.reorder_bodies.lock().unwrap().push(body.clone());
            if state.fail_reorder.load(Ordering::SeqCst) {
                return failure();
            }
            let mut categories = state.categories.lock().unwrap();
            for (index, id) in body.as_array().cloned().unwrap_or_default().iter().enumerate() {
                if let Some(c) = categories.iter_mut().find(|c| &c["id"] == id) {
                    c["position"] = json!(index);
                }
            }
            ok(json!({"message": "Category order saved"}))
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "No such endpoint"})),
        ),
    }
}

fn login(body: &Value) -> (StatusCode, Json<Value>) {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@ims.io"), Some("secret")) => {
            ok(json!({"token": ADMIN_TOKEN, "role": "ADMIN"}))
        }
        (Some("manager@ims.io"), Some("secret")) => {
            ok(json!({"token": MANAGER_TOKEN, "role": "MANAGER"}))
        }
        (Some("tokenless@ims.io"), Some("secret")) => ok(json!({"role": "ADMIN"})),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 400, "message": "Password Does Not Match"})),
        ),
    }
}

fn failure() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({"status": 500, "message": "Could not persist order"})),
    )
}

fn ok(mut payload: Value) -> (StatusCode, Json<Value>) {
    payload["status"] = json!(200);
    if payload.get("message").is_none() {
        payload["message"] = json!("success");
    }
    (StatusCode::OK, Json(payload))
}
