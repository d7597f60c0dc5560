//! Login Controller
//!
//! Posts credentials and stores the returned token in the session.

use log::{info, warn};

use crate::api::AuthApi;
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse};
use crate::navigation::Route;
use crate::session::Session;

const MISSING_FIELDS: &str = "Username and password are required";
const FAILURE_MESSAGE: &str = "Login failed";

impl LoginRequest {
    pub async fn send(&self, api: &dyn AuthApi) -> ApiResult<LoginResponse> {
        api.login(self).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginController {
    request: LoginRequest,
    error: Option<String>,
    submitting: bool,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.request.username,
            LoginField::Password => &self.request.password,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Username => self.request.username = value.to_string(),
            LoginField::Password => self.request.password = value.to_string(),
        }
    }

    pub fn submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        if self.request.username.trim().is_empty() || self.request.password.is_empty() {
            self.error = Some(MISSING_FIELDS.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.request.clone())
    }

    /// Store the token on success and return where to go next
    pub fn apply_result(&mut self, session: &Session, result: ApiResult<LoginResponse>) -> Option<Route> {
        self.submitting = false;
        match result {
            Ok(response) => {
                info!("logged in as {}", self.request.username);
                session.set_token(&response.token);
                self.request.password.clear();
                Some(Route::Products)
            }
            Err(e) => {
                warn!("login failed: {}", e);
                self.error = Some(e.server_message().unwrap_or(FAILURE_MESSAGE).to_string());
                None
            }
        }
    }
}
