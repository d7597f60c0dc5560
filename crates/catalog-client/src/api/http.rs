//! reqwest-backed implementation of the transport traits.

use async_trait::async_trait;
use log::debug;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{AuthApi, ProductApi};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ApiEnvelope, LoginRequest, LoginResponse, Product, ProductDraft, ProductPage,
    RegisterRequest,
};

/// HTTP client for the catalog backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn product_url(&self, id: &str) -> String {
        product_url(&self.config, id)
    }
}

fn product_url(config: &ApiConfig, id: &str) -> String {
    format!(
        "{}/{}",
        config.products_url(),
        utf8_percent_encode(id, NON_ALPHANUMERIC)
    )
}

/// Turn a non-2xx response into an `ApiError::Server`
async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl ProductApi for HttpApi {
    async fn list_products(&self, page: u32, size: u32) -> ApiResult<ProductPage> {
        debug!("GET products page={} size={}", page, size);
        let response = self
            .client
            .get(self.config.listing_url())
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;
        let envelope: ApiEnvelope<ProductPage> = read_json(response).await?;
        Ok(envelope.data)
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        debug!("GET product {}", id);
        let response = self.client.get(self.product_url(id)).send().await?;
        read_json(response).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        debug!("POST product {:?}", draft.name);
        let response = self
            .client
            .post(self.config.products_url())
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product> {
        debug!("PUT product {}", id);
        let response = self
            .client
            .put(self.product_url(id))
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        debug!("DELETE product {}", id);
        let response = self.client.delete(self.product_url(id)).send().await?;
        check(response).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        debug!("POST register {}", request.username);
        let response = self
            .client
            .post(self.config.auth_url("register"))
            .json(request)
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        debug!("POST login {}", request.username);
        let response = self
            .client
            .post(self.config.auth_url("login"))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_url_escapes_id() {
        let config = ApiConfig::default();
        assert_eq!(
            product_url(&config, "abc123"),
            "http://localhost:9191/api/products/abc123"
        );
        assert_eq!(
            product_url(&config, "a/b c"),
            "http://localhost:9191/api/products/a%2Fb%20c"
        );
    }
}
