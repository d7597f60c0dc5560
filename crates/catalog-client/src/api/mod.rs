//! Backend Transport
//!
//! Abstract interfaces for talking to the catalog backend, plus the HTTP
//! implementation. Browser futures are not `Send`, so the traits opt out of
//! the `Send` bound.

mod http;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    LoginRequest, LoginResponse, Product, ProductDraft, ProductPage, RegisterRequest,
};

pub use http::HttpApi;

/// Product CRUD plus the paginated listing
#[async_trait(?Send)]
pub trait ProductApi {
    /// Fetch one page of product+stock rows (`page` is zero-based)
    async fn list_products(&self, page: u32, size: u32) -> ApiResult<ProductPage>;

    async fn get_product(&self, id: &str) -> ApiResult<Product>;

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product>;

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product>;

    async fn delete_product(&self, id: &str) -> ApiResult<()>;
}

/// Account endpoints
#[async_trait(?Send)]
pub trait AuthApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
}
