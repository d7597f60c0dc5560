//! Registration Controller
//!
//! On success a redirect to the login view is scheduled. The redirect carries
//! a ticket so that a torn-down or resubmitted form never acts on an old one.

use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};
use validator::{Validate, ValidationErrors};

use crate::api::AuthApi;
use crate::error::ApiResult;
use crate::models::RegisterRequest;
use crate::navigation::Route;

/// How long the confirmation stays up before moving to login
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

const SUCCESS_MESSAGE: &str = "Registration successful! You can now login.";
const FAILURE_MESSAGE: &str = "Registration failed";

/// Field order used when picking which validation message to show
const FIELD_ORDER: [&str; 3] = ["username", "email", "password"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
}

impl FromStr for RegisterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "username" => Ok(RegisterField::Username),
            "email" => Ok(RegisterField::Email),
            "password" => Ok(RegisterField::Password),
            other => Err(format!("unknown registration field: {}", other)),
        }
    }
}

impl RegisterRequest {
    pub async fn send(&self, api: &dyn AuthApi) -> ApiResult<()> {
        api.register(self).await
    }
}

/// A navigation the UI should perform once `after` has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
    pub ticket: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterController {
    request: RegisterRequest,
    error: Option<String>,
    success: Option<String>,
    submitting: bool,
    pending_redirect: Option<u64>,
    tickets: u64,
}

impl RegisterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Username => &self.request.username,
            RegisterField::Email => &self.request.email,
            RegisterField::Password => &self.request.password,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: RegisterField, value: &str) {
        let slot = match field {
            RegisterField::Username => &mut self.request.username,
            RegisterField::Email => &mut self.request.email,
            RegisterField::Password => &mut self.request.password,
        };
        *slot = value.to_string();
    }

    /// Clear old messages, validate, and hand back the request to post
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.success = None;
        self.cancel_redirect();
        if let Err(errors) = self.request.validate() {
            self.error = Some(first_violation(&errors));
            return None;
        }
        self.submitting = true;
        Some(self.request.clone())
    }

    /// Apply the server's answer; success yields the delayed redirect to schedule
    pub fn apply_result(&mut self, result: ApiResult<()>) -> Option<Redirect> {
        self.submitting = false;
        match result {
            Ok(()) => {
                info!("registered {}", self.request.username);
                self.success = Some(SUCCESS_MESSAGE.to_string());
                self.tickets += 1;
                self.pending_redirect = Some(self.tickets);
                Some(Redirect { to: Route::Login, after: REDIRECT_DELAY, ticket: self.tickets })
            }
            Err(e) => {
                warn!("registration failed: {}", e);
                let message = e.server_message().unwrap_or(FAILURE_MESSAGE);
                self.error = Some(message.to_string());
                None
            }
        }
    }

    /// Drop any scheduled redirect (teardown)
    pub fn cancel_redirect(&mut self) {
        self.pending_redirect = None;
    }

    /// Called when the timer fires; yields the route only if the redirect is still live
    pub fn redirect_due(&mut self, ticket: u64) -> Option<Route> {
        if self.pending_redirect != Some(ticket) {
            return None;
        }
        self.pending_redirect = None;
        Some(Route::Login)
    }
}

fn first_violation(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|name| fields.get(*name))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid registration details".to_string())
}
