//! Catalog Client
//!
//! Headless core of the catalog front end. Nothing in here touches the DOM,
//! so every controller can be driven from native tests.
//!
//! Layered like the UI that consumes it:
//! - models: wire entities (products, stock, auth payloads)
//! - api: transport traits and the reqwest-backed implementation
//! - session: credential token storage and claims decoding
//! - controllers: per-view state machines that emit requests and absorb responses

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;

pub use config::{ApiConfig, AppConfig};
pub use error::{ApiError, ApiResult};
pub use navigation::Route;
pub use session::{Claims, MemoryTokenStore, Session, TokenStore};
