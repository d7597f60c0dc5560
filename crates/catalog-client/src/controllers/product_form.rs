//! Product Form Controller
//!
//! One controller for both creating and editing. In edit mode the product is
//! loaded first and only its editable fields are copied into the form.

use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;

use crate::api::ProductApi;
use crate::error::ApiResult;
use crate::models::{Product, ProductDraft};
use crate::navigation::Route;

const LOAD_ERROR: &str = "Error fetching product data";
const VALIDATION_ERROR: &str = "Please fill in all fields correctly.";
const SAVE_ERROR: &str = "Error saving product";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// Edit mode when an id is present
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }
}

/// Editable product fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
    Price,
    ImageUrl,
}

impl FromStr for ProductField {
    type Err = String;

    /// Parse the field's wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProductField::Name),
            "description" => Ok(ProductField::Description),
            "price" => Ok(ProductField::Price),
            "imageUrl" => Ok(ProductField::ImageUrl),
            other => Err(format!("unknown product field: {}", other)),
        }
    }
}

/// Fetch of the product being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: String,
}

impl LoadRequest {
    pub async fn send(&self, api: &dyn ProductApi) -> ApiResult<Product> {
        api.get_product(&self.id).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(ProductDraft),
    Update { id: String, draft: ProductDraft },
}

impl SaveRequest {
    pub async fn send(&self, api: &dyn ProductApi) -> ApiResult<Product> {
        match self {
            SaveRequest::Create(draft) => api.create_product(draft).await,
            SaveRequest::Update { id, draft } => api.update_product(id, draft).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormController {
    mode: FormMode,
    name: String,
    description: String,
    /// Price exactly as typed
    price_input: String,
    /// Parsed price, `None` when the input is not a number
    price: Option<Decimal>,
    image_url: String,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl ProductFormController {
    /// Build the form; in edit mode the returned request loads the product
    pub fn new(mode: FormMode) -> (Self, Option<LoadRequest>) {
        let load = match &mode {
            FormMode::Edit(id) => Some(LoadRequest { id: id.clone() }),
            FormMode::Create => None,
        };
        let form = Self {
            loading: load.is_some(),
            mode,
            name: String::new(),
            description: String::new(),
            price_input: "0".to_string(),
            price: Some(Decimal::ZERO),
            image_url: String::new(),
            saving: false,
            error: None,
        };
        (form, load)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Current text of a field, for binding back into its input
    pub fn value(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price_input,
            ProductField::ImageUrl => &self.image_url,
        }
    }

    /// Apply the edit-mode load. Responses for another product are ignored.
    pub fn apply_loaded(&mut self, request: &LoadRequest, result: ApiResult<Product>) -> bool {
        if self.mode != FormMode::Edit(request.id.clone()) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(product) => {
                let draft = product.to_draft();
                self.name = draft.name;
                self.description = draft.description;
                self.price_input = draft.price.to_string();
                self.price = Some(draft.price);
                self.image_url = draft.image_url;
            }
            Err(e) => {
                warn!("loading product {} failed: {}", request.id, e);
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        true
    }

    pub fn update_field(&mut self, field: ProductField, value: &str) {
        match field {
            ProductField::Name => self.name = value.to_string(),
            ProductField::Description => self.description = value.to_string(),
            ProductField::Price => {
                self.price_input = value.to_string();
                self.price = value.trim().parse().ok();
            }
            ProductField::ImageUrl => self.image_url = value.to_string(),
        }
    }

    /// Current values as a request body, if they pass validation
    pub fn draft(&self) -> Option<ProductDraft> {
        let price = self.price.filter(|p| *p > Decimal::ZERO)?;
        if self.name.is_empty() || self.description.is_empty() {
            return None;
        }
        Some(ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            image_url: self.image_url.clone(),
        })
    }

    /// Validate and build the create/update request. Nothing is sent while
    /// loading, while a save is in flight, or when validation fails.
    pub fn submit(&mut self) -> Option<SaveRequest> {
        if self.loading || self.saving {
            return None;
        }
        let Some(draft) = self.draft() else {
            self.error = Some(VALIDATION_ERROR.to_string());
            return None;
        };
        self.error = None;
        self.saving = true;
        Some(match &self.mode {
            FormMode::Create => SaveRequest::Create(draft),
            FormMode::Edit(id) => SaveRequest::Update { id: id.clone(), draft },
        })
    }

    /// Apply the save outcome; on success the caller navigates to the returned route
    pub fn apply_saved(&mut self, result: ApiResult<Product>) -> Option<Route> {
        self.saving = false;
        match result {
            Ok(_) => Some(Route::Products),
            Err(e) => {
                warn!("saving product failed: {}", e);
                self.error = Some(SAVE_ERROR.to_string());
                None
            }
        }
    }
}
