//! Session
//!
//! Holds the credential token between visits and decodes its claims for
//! display. The signature is never checked here; the backend is the only
//! party that trusts the token.

use std::cell::RefCell;
use std::rc::Rc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use log::warn;
use serde::Deserialize;

/// Storage key the token is persisted under
pub const TOKEN_KEY: &str = "token";

/// Persistence for the credential token
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_string())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Claims shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject (the username)
    pub sub: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the payload segment of a JWT without verifying it
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let payload = match segments.as_slice() {
        [_, payload, _] => *payload,
        other => return Err(TokenError::Segments(other.len())),
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Explicit session context, created once at startup and handed to the views that need it
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::default()))
    }

    pub fn get_token(&self) -> Option<String> {
        self.store.get().filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Logout
    pub fn clear_token(&self) {
        self.store.clear();
    }

    /// Claims of the stored token; a malformed token counts as logged out
    pub fn current_user(&self) -> Option<Claims> {
        let token = self.get_token()?;
        match decode_claims(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                warn!("ignoring stored token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"alg":"HS256","typ":"JWT"}
    const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

    fn token_for(payload: &str) -> String {
        format!("{}.{}.signature", HEADER, URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_no_token_means_no_user() {
        let session = Session::in_memory();
        assert_eq!(session.get_token(), None);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_subject_decoded_without_verification() {
        let session = Session::in_memory();
        session.set_token(&token_for(r#"{"sub":"alice","exp":1700000000}"#));
        assert_eq!(session.current_user(), Some(Claims { sub: "alice".into() }));
    }

    #[test]
    fn test_malformed_token_treated_as_logged_out() {
        let session = Session::new(Rc::new(MemoryTokenStore::with_token("not-a-jwt")));
        assert_eq!(session.current_user(), None);

        session.set_token(&format!("{}.%%%.sig", HEADER));
        assert_eq!(session.current_user(), None);

        session.set_token(&token_for(r#"{"name":"no subject"}"#));
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_decode_errors_are_distinguished() {
        assert!(matches!(decode_claims("a.b"), Err(TokenError::Segments(2))));
        assert!(matches!(decode_claims("a.@@.c"), Err(TokenError::Encoding(_))));
        assert!(matches!(
            decode_claims(&token_for("[1,2]")),
            Err(TokenError::Claims(_))
        ));
    }

    #[test]
    fn test_padded_payload_accepted() {
        let padded = format!("{}.{}==.sig", HEADER, URL_SAFE_NO_PAD.encode(r#"{"sub":"bob"}"#));
        assert_eq!(decode_claims(&padded).unwrap().sub, "bob");
    }

    #[test]
    fn test_clear_token_logs_out() {
        let session = Session::in_memory();
        session.set_token(&token_for(r#"{"sub":"alice"}"#));
        assert!(session.current_user().is_some());
        session.clear_token();
        assert_eq!(session.get_token(), None);
        assert_eq!(session.current_user(), None);
    }
}
