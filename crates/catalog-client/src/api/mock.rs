//! In-memory transport for controller tests.
//!
//! Responses are scripted up front; every call is recorded so tests can
//! assert on exactly which requests went out.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::{AuthApi, ProductApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    LoginRequest, LoginResponse, Product, ProductDraft, ProductListEntry, ProductPage,
    RegisterRequest, Stock,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListProducts { page: u32, size: u32 },
    GetProduct(String),
    CreateProduct(ProductDraft),
    UpdateProduct(String, ProductDraft),
    DeleteProduct(String),
    Register(RegisterRequest),
    Login(LoginRequest),
}

#[derive(Default)]
pub struct MockApi {
    pages: RefCell<HashMap<u32, ApiResult<ProductPage>>>,
    products: RefCell<HashMap<String, ApiResult<Product>>>,
    save: RefCell<Option<ApiResult<Product>>>,
    delete: RefCell<Option<ApiResult<()>>>,
    register: RefCell<Option<ApiResult<()>>>,
    login: RefCell<Option<ApiResult<LoginResponse>>>,
    calls: RefCell<Vec<Call>>,
}

fn unscripted() -> ApiError {
    ApiError::Transport("no scripted response".into())
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, result: ApiResult<ProductPage>) -> Self {
        self.pages.borrow_mut().insert(page, result);
        self
    }

    pub fn with_product(self, id: &str, result: ApiResult<Product>) -> Self {
        self.products.borrow_mut().insert(id.to_string(), result);
        self
    }

    pub fn with_save(self, result: ApiResult<Product>) -> Self {
        *self.save.borrow_mut() = Some(result);
        self
    }

    pub fn with_delete(self, result: ApiResult<()>) -> Self {
        *self.delete.borrow_mut() = Some(result);
        self
    }

    pub fn with_register(self, result: ApiResult<()>) -> Self {
        *self.register.borrow_mut() = Some(result);
        self
    }

    pub fn with_login(self, result: ApiResult<LoginResponse>) -> Self {
        *self.login.borrow_mut() = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ProductApi for MockApi {
    async fn list_products(&self, page: u32, size: u32) -> ApiResult<ProductPage> {
        self.record(Call::ListProducts { page, size });
        self.pages.borrow().get(&page).cloned().unwrap_or_else(|| Err(unscripted()))
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        self.record(Call::GetProduct(id.to_string()));
        self.products.borrow().get(id).cloned().unwrap_or_else(|| Err(unscripted()))
    }

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        self.record(Call::CreateProduct(draft.clone()));
        self.save.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product> {
        self.record(Call::UpdateProduct(id.to_string(), draft.clone()));
        self.save.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.record(Call::DeleteProduct(id.to_string()));
        self.delete.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.record(Call::Register(request.clone()));
        self.register.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.record(Call::Login(request.clone()));
        self.login.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }
}

// ========================
// Fixtures
// ========================

pub fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        description: format!("Description of {}", id),
        price: "9.50".parse().unwrap(),
        image_url: format!("https://img.example.com/{}.png", id),
        created_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

pub fn entry(id: &str, qty: u32) -> ProductListEntry {
    ProductListEntry {
        product: product(id),
        stock: Stock { product_id: Some(id.to_string()), qty },
    }
}

/// Page whose rows are named `{page}-0`, `{page}-1`, ...
pub fn page_of(page: u32, rows: usize, total_pages: u32) -> ProductPage {
    ProductPage {
        content: (0..rows).map(|i| entry(&format!("{}-{}", page, i), i as u32)).collect(),
        total_pages,
    }
}

pub fn server_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Server { status, message: message.map(str::to_string) }
}
