//! Login and logout flows.

use tracing::{info, warn};

use ims_auth::session::SessionState;
use ims_client::{ApiClient, LoginRequest};
use ims_core::error::AppError;
use ims_core::result::AppResult;
use ims_entity::user::Role;

use crate::notice::NoticeCenter;

/// Landing page for administrators.
pub const ADMIN_LANDING: &str = "/dashboard";
/// Landing page for everyone else.
pub const DEFAULT_LANDING: &str = "/profile";

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Role name as issued by the API.
    pub role: String,
    /// Where to go next.
    pub landing: &'static str,
}

/// Exchanges credentials for a token and stores it.
#[derive(Debug, Clone)]
pub struct LoginService {
    /// API client.
    client: ApiClient,
    /// Where the token and role end up.
    session: SessionState,
    /// Where failures are shown.
    notices: NoticeCenter,
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(client: ApiClient, session: SessionState, notices: NoticeCenter) -> Self {
        Self {
            client,
            session,
            notices,
        }
    }

    /// Log in and persist the issued credentials.
    ///
    /// Every failure is also raised as an error notice.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        self.try_login(email, password).await.inspect_err(|e| {
            self.notices
                .error(e.user_message("Unable to login. Please try again."));
        })
    }

    async fn try_login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        let response = self
            .client
            .login(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;

        let (token, role) = match (response.token, response.role) {
            (Some(token), Some(role)) if !token.is_empty() && !role.is_empty() => (token, role),
            _ => {
                warn!(email, "Login response lacked token or role");
                return Err(AppError::remote("Invalid response from server."));
            }
        };

        self.session.establish(&token, &role)?;
        let landing = if Role::parse(&role) == Some(Role::Admin) {
            ADMIN_LANDING
        } else {
            DEFAULT_LANDING
        };
        info!(email, role = %role, landing, "Logged in");

        Ok(LoginOutcome { role, landing })
    }

    /// Forget the stored credentials.
    pub fn logout(&self) -> AppResult<()> {
        self.session.logout()
    }
}
