//! The REST client.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use ims_auth::session::SessionState;
use ims_core::config::ApiConfig;
use ims_core::error::{AppError, ErrorKind};
use ims_core::result::AppResult;
use ims_core::types::{CategoryId, PositionUpdate, TransactionId};
use ims_entity::{Category, Product, Supplier, Transaction, TransactionStatus, User};

use crate::envelope;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain password; only ever sent to the API.
    pub password: String,
}

/// Payload of a login response. Either field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
    /// Role name, e.g. `ADMIN`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Plain password.
    pub password: String,
    /// Contact number.
    pub phone_number: String,
    /// Requested role name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Query for `GET /transactions/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Zero-based page.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Free-text filter.
    pub search_text: String,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 50,
            search_text: String::new(),
        }
    }
}

#[derive(Deserialize)]
struct UserPayload {
    user: User,
}

#[derive(Deserialize)]
struct CategoriesPayload {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct ProductsPayload {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct SuppliersPayload {
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

#[derive(Deserialize)]
struct TransactionsPayload {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
struct TransactionPayload {
    transaction: Transaction,
}

/// Client for the inventory API.
///
/// Cheap to clone; clones share the connection pool. The bearer token is
/// read from [`SessionState`] on every protected call, never cached.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL, always ending in `/`.
    base: Url,
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Source of the bearer token.
    session: SessionState,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig, session: SessionState) -> AppResult<Self> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|e| {
            AppError::configuration(format!("Invalid API base URL '{}': {e}", config.base_url))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            base,
            http,
            session,
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The session the client reads its token from.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    // ── Auth ──────────────────────────────────────────────────────────

    /// `POST /auth/login`.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let req = self.request(Method::POST, "auth/login", false)?.json(request);
        self.fetch(req, "Login failed").await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        let req = self.request(Method::POST, "auth/register", false)?.json(request);
        self.execute(req, "Registration failed").await
    }

    /// `GET /users/current`.
    pub async fn current_user(&self) -> AppResult<User> {
        let req = self.request(Method::GET, "users/current", true)?;
        let payload: UserPayload = self.fetch(req, "Unable to load the current user").await?;
        Ok(payload.user)
    }

    // ── Categories ────────────────────────────────────────────────────

    /// `GET /categories/all`.
    pub async fn all_categories(&self) -> AppResult<Vec<Category>> {
        let req = self.request(Method::GET, "categories/all", true)?;
        let payload: CategoriesPayload = self.fetch(req, "Unable to get all categories").await?;
        Ok(payload.categories)
    }

    /// `PUT /categories/reorder` with the ids in their new order.
    pub async fn reorder_categories(&self, ordered_ids: &[CategoryId]) -> AppResult<()> {
        let req = self
            .request(Method::PUT, "categories/reorder", true)?
            .json(ordered_ids);
        self.execute(req, "Failed to save new category order").await
    }

    // ── Products ──────────────────────────────────────────────────────

    /// `GET /products/all`.
    pub async fn all_products(&self) -> AppResult<Vec<Product>> {
        let req = self.request(Method::GET, "products/all", true)?;
        let payload: ProductsPayload = self.fetch(req, "Unable to get all products").await?;
        Ok(payload.products)
    }

    /// `PUT /products/reorder` with `{id, position}` for every product.
    pub async fn reorder_products(&self, positions: &[PositionUpdate]) -> AppResult<()> {
        let req = self
            .request(Method::PUT, "products/reorder", true)?
            .json(positions);
        self.execute(req, "Failed to save new product order").await
    }

    // ── Suppliers ─────────────────────────────────────────────────────

    /// `GET /suppliers/all`.
    pub async fn all_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let req = self.request(Method::GET, "suppliers/all", true)?;
        let payload: SuppliersPayload = self.fetch(req, "Unable to get all suppliers").await?;
        Ok(payload.suppliers)
    }

    // ── Transactions ──────────────────────────────────────────────────

    /// `GET /transactions/all?page&size&searchText`.
    pub async fn all_transactions(&self, query: &TransactionQuery) -> AppResult<Vec<Transaction>> {
        let req = self
            .request(Method::GET, "transactions/all", true)?
            .query(query);
        let payload: TransactionsPayload = self.fetch(req, "Unable to get transactions").await?;
        Ok(payload.transactions)
    }

    /// `GET /transactions/{id}`.
    pub async fn transaction(&self, id: &TransactionId) -> AppResult<Transaction> {
        let req = self.request(Method::GET, &format!("transactions/{id}"), true)?;
        let payload: TransactionPayload = self.fetch(req, "Unable to get transaction").await?;
        Ok(payload.transaction)
    }

    /// `PUT /transactions/update/{id}` with the status as a JSON string.
    pub async fn update_transaction_status(
        &self,
        id: &TransactionId,
        status: TransactionStatus,
    ) -> AppResult<()> {
        let req = self
            .request(Method::PUT, &format!("transactions/update/{id}"), true)?
            .json(&status);
        self.execute(req, "Unable to update transaction").await
    }

    // ── Plumbing ──────────────────────────────────────────────────────

    fn request(&self, method: Method, path: &str, protected: bool) -> AppResult<RequestBuilder> {
        let url = self.base.join(path).map_err(|e| {
            AppError::internal(format!("Invalid endpoint path '{path}': {e}"))
        })?;
        let mut req = self.http.request(method, url);
        if protected {
            match self.session.token() {
                Some(token) => req = req.bearer_auth(token),
                None => debug!(path, "Protected call without a stored token"),
            }
        }
        Ok(req)
    }

    /// Send and decode the envelope payload as `T`.
    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder, fallback: &str) -> AppResult<T> {
        let body = self.send(req, fallback).await?;
        serde_json::from_value(body).map_err(|e| {
            warn!(error = %e, "Undecodable API payload");
            AppError::with_source(ErrorKind::Remote, fallback, e)
        })
    }

    /// Send and only check for success.
    async fn execute(&self, req: RequestBuilder, fallback: &str) -> AppResult<()> {
        self.send(req, fallback).await.map(|_| ())
    }

    async fn send(&self, req: RequestBuilder, fallback: &str) -> AppResult<Value> {
        let response = req.send().await.map_err(|e| {
            warn!(error = %e, "API request failed to send");
            AppError::with_source(ErrorKind::Transport, fallback, e)
        })?;

        let status = response.status();
        let url = response.url().path().to_string();
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Transport, fallback, e)
        })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => value,
                Err(_) if status.is_success() => {
                    warn!(path = %url, "API returned a non-JSON body");
                    return Err(AppError::remote(fallback));
                }
                Err(_) => Value::Null,
            }
        };

        if !status.is_success() {
            let message = envelope::error_message(&body, fallback, Some(u64::from(status.as_u16())));
            warn!(path = %url, status = status.as_u16(), message, "API call rejected");
            return Err(AppError::remote(message));
        }

        debug!(path = %url, status = status.as_u16(), "API call succeeded");
        if body.is_null() {
            return Ok(Value::Object(Default::default()));
        }
        envelope::check(body, fallback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use ims_auth::credential::CredentialStore;
    use ims_core::config::CredentialConfig;
    use ims_storage::memory::MemoryStorage;

    fn client(base: &str) -> AppResult<ApiClient> {
        let store = CredentialStore::new(Arc::new(MemoryStorage::new()), &CredentialConfig::default());
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, SessionState::new(store))
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = client("http://localhost:5050/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5050/api/");
        let joined = client.base_url().join("categories/all").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:5050/api/categories/all");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = client("not a url").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_transaction_query_defaults() {
        let query = TransactionQuery::default();
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 50);
        assert!(query.search_text.is_empty());
    }
}
